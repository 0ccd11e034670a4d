//! Measurement conversion orchestration.
//!
//! Bidirectional conversion between a raw measurement, its SDS, and its
//! centile. The reference-specific statistics are delegated to a
//! [`ReferenceEngine`]; this module owns only the composition, so both the
//! SDS-based and centile-based entry points share one inversion path.

use tracing::debug;

use growth_model::{MeasurementMethod, Reference, Result, Sex};

use crate::centile::sds_for_centile;
use crate::engine::ReferenceEngine;

/// SDS of `observation_value` at the given age/sex/method under `reference`.
pub fn sds_for_measurement(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    observation_value: f64,
) -> Result<f64> {
    debug!(%reference, %method, %sex, age, observation_value, "sds lookup");
    engine.lookup_sds(reference, method, sex, age, observation_value)
}

/// The measurement value that would yield `requested_sds`.
pub fn measurement_from_sds(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    requested_sds: f64,
) -> Result<f64> {
    debug!(%reference, %method, %sex, age, requested_sds, "measurement inversion");
    engine.invert_to_measurement(reference, method, sex, age, requested_sds)
}

/// The measurement value at a centile rank: converts the centile to an SDS,
/// then inverts exactly as [`measurement_from_sds`] does.
pub fn measurement_from_centile(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    centile: f64,
) -> Result<f64> {
    let sds = sds_for_centile(centile)?;
    measurement_from_sds(engine, reference, age, sex, method, sds)
}
