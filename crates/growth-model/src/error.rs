use thiserror::Error;

use crate::enums::{MeasurementMethod, Reference, Sex};

/// Errors produced by the growth calculation crates.
///
/// Every error is terminal to a single invocation: each operation is a pure
/// calculation with no transient failure modes, so nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("gestation {weeks}+{days} is outside the supported range (22+0 to 44+6)")]
    GestationOutOfRange { weeks: u32, days: u32 },

    #[error("{role} height {value} cm is outside the plausible range ({min}-{max} cm)")]
    ImplausibleHeight {
        role: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown sex {value:?}: expected one of \"male\", \"female\"")]
    UnknownSex { value: String },

    #[error(
        "unknown measurement method {value:?}: expected one of \"height\", \"weight\", \"bmi\", \"ofc\""
    )]
    UnknownMeasurementMethod { value: String },

    #[error(
        "unknown reference {value:?}: expected one of \"uk-who\", \"trisomy-21\", \"turners-syndrome\""
    )]
    UnknownReference { value: String },

    #[error("centile {0} has no finite SDS: centiles must lie strictly between 0 and 100")]
    CentileOutOfRange(f64),

    #[error(
        "no reference data for {method} ({sex}) at {age} years in {reference}"
    )]
    ReferenceDataUnavailable {
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
    },
}

pub type Result<T> = std::result::Result<T, GrowthError>;
