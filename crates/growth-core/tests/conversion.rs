//! Tests for conversion orchestration against a deterministic fake engine,
//! and for mid-parental height.

use growth_core::centile::sds_for_centile;
use growth_core::conversion::{
    measurement_from_centile, measurement_from_sds, sds_for_measurement,
};
use growth_core::engine::ReferenceEngine;
use growth_core::mid_parental::mid_parental_height;
use growth_model::{GrowthError, MeasurementMethod, Reference, Result, Sex};

/// Linear stand-in for the statistical engine: median 100, SD 10, with one
/// deliberately missing combination so propagation can be asserted.
struct FakeEngine;

const FAKE_MEDIAN: f64 = 100.0;
const FAKE_SD: f64 = 10.0;

impl FakeEngine {
    fn check_coverage(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
    ) -> Result<()> {
        if reference == Reference::TurnersSyndrome && sex == Sex::Male {
            return Err(GrowthError::ReferenceDataUnavailable {
                reference,
                method,
                sex,
                age,
            });
        }
        Ok(())
    }
}

impl ReferenceEngine for FakeEngine {
    fn lookup_sds(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        observation_value: f64,
    ) -> Result<f64> {
        self.check_coverage(reference, method, sex, age)?;
        Ok((observation_value - FAKE_MEDIAN) / FAKE_SD)
    }

    fn invert_to_measurement(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        target_sds: f64,
    ) -> Result<f64> {
        self.check_coverage(reference, method, sex, age)?;
        Ok(FAKE_MEDIAN + FAKE_SD * target_sds)
    }
}

#[test]
fn test_sds_and_inversion_are_inverses() {
    let engine = FakeEngine;
    for sds in [-2.5, -0.67, 0.0, 1.5, 3.0] {
        let value = measurement_from_sds(
            &engine,
            Reference::UkWho,
            4.0,
            Sex::Female,
            MeasurementMethod::Height,
            sds,
        )
        .unwrap();
        let back = sds_for_measurement(
            &engine,
            Reference::UkWho,
            4.0,
            Sex::Female,
            MeasurementMethod::Height,
            value,
        )
        .unwrap();
        assert!((back - sds).abs() < 1e-9);
    }
}

#[test]
fn test_fiftieth_centile_is_the_median() {
    let engine = FakeEngine;
    let value = measurement_from_centile(
        &engine,
        Reference::UkWho,
        4.0,
        Sex::Male,
        MeasurementMethod::Weight,
        50.0,
    )
    .unwrap();
    assert!((value - FAKE_MEDIAN).abs() < 1e-9);
}

#[test]
fn test_centile_and_sds_entry_points_agree() {
    let engine = FakeEngine;
    for centile in [0.4, 9.0, 25.0, 75.0, 91.0, 99.6] {
        let via_centile = measurement_from_centile(
            &engine,
            Reference::Trisomy21,
            7.5,
            Sex::Female,
            MeasurementMethod::Bmi,
            centile,
        )
        .unwrap();
        let via_sds = measurement_from_sds(
            &engine,
            Reference::Trisomy21,
            7.5,
            Sex::Female,
            MeasurementMethod::Bmi,
            sds_for_centile(centile).unwrap(),
        )
        .unwrap();
        assert!((via_centile - via_sds).abs() < 1e-9);
    }
}

#[test]
fn test_out_of_domain_centile_never_reaches_the_engine() {
    let engine = FakeEngine;
    let result = measurement_from_centile(
        &engine,
        Reference::UkWho,
        4.0,
        Sex::Male,
        MeasurementMethod::Height,
        100.0,
    );
    assert!(matches!(result, Err(GrowthError::CentileOutOfRange(_))));
}

#[test]
fn test_missing_reference_data_propagates() {
    let engine = FakeEngine;
    let result = sds_for_measurement(
        &engine,
        Reference::TurnersSyndrome,
        4.0,
        Sex::Male,
        MeasurementMethod::Height,
        104.0,
    );
    assert!(matches!(
        result,
        Err(GrowthError::ReferenceDataUnavailable { .. })
    ));
}

// =========================================================================
// Mid-parental height
// =========================================================================

#[test]
fn test_mid_parental_height_formulae() {
    assert_eq!(
        mid_parental_height(170.0, 180.0, Sex::Male).unwrap(),
        181.5
    );
    assert_eq!(
        mid_parental_height(170.0, 180.0, Sex::Female).unwrap(),
        168.5
    );
}

#[test]
fn test_mid_parental_height_rejects_implausible_inputs() {
    assert!(matches!(
        mid_parental_height(-5.0, 180.0, Sex::Male),
        Err(GrowthError::ImplausibleHeight { .. })
    ));
    assert!(mid_parental_height(170.0, 0.0, Sex::Female).is_err());
    assert!(mid_parental_height(99.9, 180.0, Sex::Male).is_err());
    assert!(mid_parental_height(170.0, 251.0, Sex::Male).is_err());
    assert!(mid_parental_height(170.0, f64::NAN, Sex::Male).is_err());
}
