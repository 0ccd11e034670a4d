//! SDS ↔ centile conversion.
//!
//! The bijection `centile = 100 · Φ(sds)` is exact and reference-independent.
//! It lives here once and every entry point shares it, so the SDS-based and
//! centile-based conversion paths are exact inverses of one another.

use statrs::distribution::{ContinuousCDF, Normal};

use growth_model::{GrowthError, Result};

fn standard_normal() -> Normal {
    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal,
        // Parameters are constants; construction cannot fail.
        Err(_) => unreachable!("standard normal parameters are valid"),
    }
}

/// Centile rank of an SDS: `100 · Φ(sds)`.
pub fn centile_for_sds(sds: f64) -> f64 {
    100.0 * standard_normal().cdf(sds)
}

/// SDS for a centile rank: `Φ⁻¹(centile / 100)`.
///
/// Centiles of exactly 0 or 100 have no finite SDS under the normal inverse
/// and are rejected rather than clamped.
pub fn sds_for_centile(centile: f64) -> Result<f64> {
    if !(centile > 0.0 && centile < 100.0) {
        return Err(GrowthError::CentileOutOfRange(centile));
    }
    Ok(standard_normal().inverse_cdf(centile / 100.0))
}
