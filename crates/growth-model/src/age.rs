//! Human-readable calendar age breakdown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elapsed time between two dates as whole years, months, and days.
///
/// When the observation date precedes the birth date, every component is
/// negated rather than rejected: out-of-order dates occur in clinical record
/// correction and the sign is preserved consistently with the decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAge {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl CalendarAge {
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Negates every component, preserving the all-same-sign invariant.
    pub fn negated(&self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
        }
    }

    /// True when the span runs backwards in time.
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }
}

fn unit(count: i32, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

impl fmt::Display for CalendarAge {
    /// Pluralized breakdown, e.g. `1 year, 0 months, 0 days`.
    ///
    /// Negative spans render the magnitudes behind a single leading sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, age) = if self.is_negative() {
            ("-", self.negated())
        } else {
            ("", *self)
        };
        write!(
            f,
            "{sign}{}, {}, {}",
            unit(age.years, "year"),
            unit(age.months, "month"),
            unit(age.days, "day"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pluralization() {
        assert_eq!(
            CalendarAge::new(1, 0, 0).to_string(),
            "1 year, 0 months, 0 days"
        );
        assert_eq!(
            CalendarAge::new(2, 1, 15).to_string(),
            "2 years, 1 month, 15 days"
        );
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(
            CalendarAge::new(0, -2, -3).to_string(),
            "-0 years, 2 months, 3 days"
        );
    }

    #[test]
    fn test_negation_round_trip() {
        let age = CalendarAge::new(3, 4, 5);
        assert_eq!(age.negated().negated(), age);
        assert!(age.negated().is_negative());
    }
}
