use chrono::NaiveDate;

use growth_model::{CalendarAge, Gestation, MeasurementMethod, Reference, Sex};

/// Result of an age calculation, adjusted for gestation or not.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub observation_date: NaiveDate,
    pub gestation: Gestation,
    pub adjusted: bool,
    pub decimal_age: f64,
    pub calendar_age: CalendarAge,
    /// Present only when the age was adjusted, for auditability.
    pub estimated_date_delivery: Option<NaiveDate>,
}

/// SDS and centile of an observed measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct SdsReport {
    pub reference: Reference,
    pub method: MeasurementMethod,
    pub sex: Sex,
    pub age: f64,
    pub observation_value: f64,
    pub sds: f64,
    pub centile: f64,
}

/// Measurement reconstructed from a target SDS or centile.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementReport {
    pub reference: Reference,
    pub method: MeasurementMethod,
    pub sex: Sex,
    pub age: f64,
    pub sds: f64,
    pub centile: f64,
    pub value: f64,
}

/// Mid-parental (target) height estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct MidParentalReport {
    pub sex: Sex,
    pub height_maternal: f64,
    pub height_paternal: f64,
    pub height: f64,
}
