//! Decimal and calendar age calculations, with gestational correction.
//!
//! All spans are exact calendar arithmetic on `chrono::NaiveDate`: a decimal
//! age is whole anniversary years plus the fraction of the current
//! anniversary-to-anniversary year that has elapsed. A flat 365.25-day divisor
//! would disagree with the calendar around leap days, so it is never used.
//!
//! Out-of-order dates are accepted and yield negative ages (clinical records
//! are corrected out of order); the sign is consistent between the decimal and
//! calendar forms.

use chrono::{Datelike, Duration, NaiveDate};

use growth_model::{CalendarAge, Gestation};

/// Exact elapsed time between two dates as a fraction of a year.
///
/// Whole years are counted by birthday anniversary; the remainder is the days
/// since the last anniversary divided by the days between the surrounding
/// anniversaries. A 29 February birthday falls on 28 February in common years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use growth_core::age::chronological_decimal_age;
///
/// let birth = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let observation = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert_eq!(chronological_decimal_age(birth, observation), 1.0);
/// ```
pub fn chronological_decimal_age(birth_date: NaiveDate, observation_date: NaiveDate) -> f64 {
    if observation_date < birth_date {
        return -chronological_decimal_age(observation_date, birth_date);
    }

    let mut whole_years = observation_date.year() - birth_date.year();
    if anniversary(birth_date, whole_years) > observation_date {
        whole_years -= 1;
    }
    let last = anniversary(birth_date, whole_years);
    let next = anniversary(birth_date, whole_years + 1);

    let elapsed = observation_date.signed_duration_since(last).num_days() as f64;
    let year_length = next.signed_duration_since(last).num_days() as f64;
    f64::from(whole_years) + elapsed / year_length
}

/// The same elapsed time decomposed into whole years, months, and days.
///
/// Successive calendar subtraction: when the day component would be negative,
/// days are borrowed from the month preceding the observation month
/// (repeatedly, until non-negative), then a negative month component borrows
/// from the year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use growth_core::age::chronological_calendar_age;
///
/// let birth = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let observation = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let age = chronological_calendar_age(birth, observation);
/// assert_eq!(age.to_string(), "1 year, 0 months, 0 days");
/// ```
pub fn chronological_calendar_age(
    birth_date: NaiveDate,
    observation_date: NaiveDate,
) -> CalendarAge {
    if observation_date < birth_date {
        return chronological_calendar_age(observation_date, birth_date).negated();
    }

    let mut years = observation_date.year() - birth_date.year();
    let mut months = observation_date.month() as i32 - birth_date.month() as i32;
    let mut days = observation_date.day() as i32 - birth_date.day() as i32;

    let mut borrow_year = observation_date.year();
    let mut borrow_month = observation_date.month();
    while days < 0 {
        // Walk back one month and borrow its length.
        if borrow_month == 1 {
            borrow_year -= 1;
            borrow_month = 12;
        } else {
            borrow_month -= 1;
        }
        days += days_in_month(borrow_year, borrow_month);
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    CalendarAge::new(years, months, days)
}

/// Decimal age measured from the estimated date of delivery instead of the
/// actual birth date, expressing age "as if born at term".
pub fn corrected_decimal_age(
    birth_date: NaiveDate,
    observation_date: NaiveDate,
    gestation: Gestation,
) -> f64 {
    let edd = estimated_date_delivery(birth_date, gestation);
    chronological_decimal_age(edd, observation_date)
}

/// The date the child would have reached 40 completed weeks gestation.
///
/// Identity at term: a gestation of 40+0 returns the birth date unchanged.
/// Post-term gestations yield a date before birth, which corrects the age
/// upward.
pub fn estimated_date_delivery(birth_date: NaiveDate, gestation: Gestation) -> NaiveDate {
    birth_date + Duration::days(gestation.days_short_of_term())
}

/// The birthday anniversary `years` after birth.
fn anniversary(birth_date: NaiveDate, years: i32) -> NaiveDate {
    let year = birth_date.year() + years;
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        // 29 February resolves to 28 February in common years.
        .or_else(|| NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day() - 1))
        .unwrap_or(birth_date)
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap_or_default();
    next.signed_duration_since(first).num_days() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2021, 12), 31);
        assert_eq!(days_in_month(2021, 4), 30);
    }

    #[test]
    fn test_leap_birthday_anniversary() {
        let birth = date(2020, 2, 29);
        assert_eq!(anniversary(birth, 1), date(2021, 2, 28));
        assert_eq!(anniversary(birth, 4), date(2024, 2, 29));
    }
}
