//! The statistical engine seam.

use growth_model::{MeasurementMethod, Reference, Result, Sex};

/// Reference-specific statistical model consumed by the conversion service.
///
/// Implementations own the per-reference statistics (LMS parameters, lookup
/// tables, interpolation); the orchestration layer only composes these two
/// operations with the reference-independent SDS↔centile bijection. Keeping
/// the seam here lets the conversion logic be tested against a deterministic
/// fake engine.
///
/// Implementations must be safe for concurrent read access: every lookup is a
/// pure function of its arguments.
pub trait ReferenceEngine {
    /// SDS of `observation_value` at the given age/sex/method under
    /// `reference`.
    ///
    /// Fails with [`growth_model::GrowthError::ReferenceDataUnavailable`] when
    /// the combination falls outside the published reference data's domain.
    fn lookup_sds(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        observation_value: f64,
    ) -> Result<f64>;

    /// The measurement value that would yield `target_sds`, inverting the
    /// reference formula.
    fn invert_to_measurement(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        target_sds: f64,
    ) -> Result<f64>;
}
