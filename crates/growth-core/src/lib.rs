//! Calculation-orchestration layer for growth assessment.
//!
//! Normalizes date/gestation inputs into decimal ages and converts between
//! measurements, SDS, and centiles against a pluggable reference engine.
//! Every operation is synchronous, side-effect-free, and independent of any
//! other invocation.

pub mod age;
pub mod centile;
pub mod conversion;
pub mod engine;
pub mod mid_parental;

pub use age::{
    chronological_calendar_age, chronological_decimal_age, corrected_decimal_age,
    estimated_date_delivery,
};
pub use centile::{centile_for_sds, sds_for_centile};
pub use conversion::{measurement_from_centile, measurement_from_sds, sds_for_measurement};
pub use engine::ReferenceEngine;
pub use mid_parental::mid_parental_height;
