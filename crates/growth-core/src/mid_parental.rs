//! Mid-parental (target) height estimation.

use growth_model::{GrowthError, Result, Sex};

/// Plausible adult height bounds for a parent, in cm.
const MIN_PARENTAL_HEIGHT_CM: f64 = 100.0;
const MAX_PARENTAL_HEIGHT_CM: f64 = 250.0;

/// Sex adjustment applied to the parental mean, in cm.
const SEX_OFFSET_CM: f64 = 13.0;

/// Target adult height estimate from parental heights, in cm.
///
/// Standard clinical formula: `(maternal + paternal + 13) / 2` for a boy,
/// `(maternal + paternal − 13) / 2` for a girl. Heights outside
/// [100, 250] cm are rejected.
///
/// # Examples
///
/// ```
/// use growth_core::mid_parental::mid_parental_height;
/// use growth_model::Sex;
///
/// assert_eq!(mid_parental_height(170.0, 180.0, Sex::Male).unwrap(), 181.5);
/// assert_eq!(mid_parental_height(170.0, 180.0, Sex::Female).unwrap(), 168.5);
/// ```
pub fn mid_parental_height(height_maternal: f64, height_paternal: f64, sex: Sex) -> Result<f64> {
    check_parental_height("maternal", height_maternal)?;
    check_parental_height("paternal", height_paternal)?;

    let offset = match sex {
        Sex::Male => SEX_OFFSET_CM,
        Sex::Female => -SEX_OFFSET_CM,
    };
    Ok((height_maternal + height_paternal + offset) / 2.0)
}

fn check_parental_height(role: &'static str, value: f64) -> Result<()> {
    if !(MIN_PARENTAL_HEIGHT_CM..=MAX_PARENTAL_HEIGHT_CM).contains(&value) {
        return Err(GrowthError::ImplausibleHeight {
            role,
            value,
            min: MIN_PARENTAL_HEIGHT_CM,
            max: MAX_PARENTAL_HEIGHT_CM,
        });
    }
    Ok(())
}
