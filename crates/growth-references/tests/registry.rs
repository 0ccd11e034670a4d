//! Tests for the embedded LMS registry through the engine contract.

use growth_core::engine::ReferenceEngine;
use growth_model::{GrowthError, MeasurementMethod, Reference, Sex};
use growth_references::LmsRegistry;

fn registry() -> LmsRegistry {
    LmsRegistry::embedded().expect("embedded tables parse")
}

#[test]
fn test_embedded_tables_load() {
    let registry = registry();
    // 8 UK-WHO grids, 8 Trisomy-21 grids, female height for Turner.
    assert_eq!(registry.coverage().len(), 17);
}

#[test]
fn test_median_measurement_scores_zero() {
    let registry = registry();
    // Grid row: uk-who male height at age 2.0 has median 87.0 cm.
    let sds = registry
        .lookup_sds(
            Reference::UkWho,
            MeasurementMethod::Height,
            Sex::Male,
            2.0,
            87.0,
        )
        .unwrap();
    assert!(sds.abs() < 1e-9);
}

#[test]
fn test_above_median_is_positive() {
    let registry = registry();
    let sds = registry
        .lookup_sds(
            Reference::UkWho,
            MeasurementMethod::Height,
            Sex::Male,
            2.0,
            92.0,
        )
        .unwrap();
    assert!(sds > 0.0);
}

#[test]
fn test_engine_round_trip_at_interpolated_age() {
    let registry = registry();
    for target in [-2.67, -1.0, 0.0, 1.33, 2.67] {
        let value = registry
            .invert_to_measurement(
                Reference::UkWho,
                MeasurementMethod::Weight,
                Sex::Female,
                9.3,
                target,
            )
            .unwrap();
        let back = registry
            .lookup_sds(
                Reference::UkWho,
                MeasurementMethod::Weight,
                Sex::Female,
                9.3,
                value,
            )
            .unwrap();
        assert!(
            (back - target).abs() < 1e-6,
            "round trip drifted at {target}: {back}"
        );
    }
}

#[test]
fn test_interpolation_lies_between_grid_medians() {
    let registry = registry();
    // uk-who male height medians: 87.0 at age 2, 96.0 at age 3.
    let value = registry
        .invert_to_measurement(
            Reference::UkWho,
            MeasurementMethod::Height,
            Sex::Male,
            2.5,
            0.0,
        )
        .unwrap();
    assert!(value > 87.0 && value < 96.0);
}

#[test]
fn test_turner_reference_is_female_height_only() {
    let registry = registry();
    assert!(
        registry
            .lookup_sds(
                Reference::TurnersSyndrome,
                MeasurementMethod::Height,
                Sex::Female,
                8.0,
                109.5,
            )
            .is_ok()
    );
    assert!(matches!(
        registry.lookup_sds(
            Reference::TurnersSyndrome,
            MeasurementMethod::Height,
            Sex::Male,
            8.0,
            120.0,
        ),
        Err(GrowthError::ReferenceDataUnavailable { .. })
    ));
    assert!(
        registry
            .lookup_sds(
                Reference::TurnersSyndrome,
                MeasurementMethod::Weight,
                Sex::Female,
                8.0,
                25.0,
            )
            .is_err()
    );
}

#[test]
fn test_ages_outside_the_grid_are_unavailable() {
    let registry = registry();
    for age in [-0.5, 25.0] {
        assert!(matches!(
            registry.lookup_sds(
                Reference::UkWho,
                MeasurementMethod::Height,
                Sex::Male,
                age,
                110.0,
            ),
            Err(GrowthError::ReferenceDataUnavailable { .. })
        ));
    }
}

#[test]
fn test_ofc_coverage_stops_before_adulthood() {
    let registry = registry();
    // Height runs to 20 years; OFC stops at 18.
    assert!(
        registry
            .lookup_sds(
                Reference::UkWho,
                MeasurementMethod::Height,
                Sex::Female,
                19.0,
                163.5,
            )
            .is_ok()
    );
    assert!(
        registry
            .lookup_sds(
                Reference::UkWho,
                MeasurementMethod::Ofc,
                Sex::Female,
                19.0,
                53.8,
            )
            .is_err()
    );
}

#[test]
fn test_coverage_reports_age_ranges() {
    let registry = registry();
    let coverage = registry.coverage();
    let turner = coverage
        .iter()
        .find(|c| c.reference == Reference::TurnersSyndrome)
        .expect("turner coverage present");
    assert_eq!(turner.method, MeasurementMethod::Height);
    assert_eq!(turner.sex, Sex::Female);
    assert_eq!((turner.min_age, turner.max_age), (1.0, 20.0));
}
