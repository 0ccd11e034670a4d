//! Command implementations, separated from argument parsing and rendering so
//! they can be exercised directly in tests.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info_span;

use growth_core::age::{
    chronological_calendar_age, chronological_decimal_age, corrected_decimal_age,
    estimated_date_delivery,
};
use growth_core::centile::{centile_for_sds, sds_for_centile};
use growth_core::conversion::{measurement_from_sds, sds_for_measurement};
use growth_core::engine::ReferenceEngine;
use growth_core::mid_parental::mid_parental_height;
use growth_model::{Gestation, MeasurementMethod, Reference, Sex};
use growth_references::{Coverage, LmsRegistry};

use crate::types::{AgeReport, MeasurementReport, MidParentalReport, SdsReport};

/// Decimal age and calendar breakdown, gestation-corrected when `adjustment`
/// is set. The calendar breakdown is always chronological.
pub fn run_age_calculation(
    birth_date: NaiveDate,
    observation_date: NaiveDate,
    gestation_weeks: u32,
    gestation_days: u32,
    adjustment: bool,
) -> Result<AgeReport> {
    let span = info_span!("age_calculation", adjustment);
    let _guard = span.enter();

    let gestation = Gestation::new(gestation_weeks, gestation_days)?;
    let calendar_age = chronological_calendar_age(birth_date, observation_date);
    let (decimal_age, edd) = if adjustment {
        (
            corrected_decimal_age(birth_date, observation_date, gestation),
            Some(estimated_date_delivery(birth_date, gestation)),
        )
    } else {
        (
            chronological_decimal_age(birth_date, observation_date),
            None,
        )
    };

    Ok(AgeReport {
        birth_date,
        observation_date,
        gestation,
        adjusted: adjustment,
        decimal_age,
        calendar_age,
        estimated_date_delivery: edd,
    })
}

/// SDS (and its centile) for an observed measurement.
pub fn run_sds_for_measurement(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    observation_value: f64,
) -> Result<SdsReport> {
    let span = info_span!("sds_for_measurement", %reference, %method);
    let _guard = span.enter();

    let sds = sds_for_measurement(engine, reference, age, sex, method, observation_value)?;
    Ok(SdsReport {
        reference,
        method,
        sex,
        age,
        observation_value,
        sds,
        centile: centile_for_sds(sds),
    })
}

/// Measurement value at a target centile.
pub fn run_measurement_for_centile(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    centile: f64,
) -> Result<MeasurementReport> {
    let span = info_span!("measurement_for_centile", %reference, %method);
    let _guard = span.enter();

    let sds = sds_for_centile(centile)?;
    let value = measurement_from_sds(engine, reference, age, sex, method, sds)?;
    Ok(MeasurementReport {
        reference,
        method,
        sex,
        age,
        sds,
        centile,
        value,
    })
}

/// Measurement value at a target SDS.
pub fn run_measurement_for_sds(
    engine: &impl ReferenceEngine,
    reference: Reference,
    age: f64,
    sex: Sex,
    method: MeasurementMethod,
    sds: f64,
) -> Result<MeasurementReport> {
    let span = info_span!("measurement_for_sds", %reference, %method);
    let _guard = span.enter();

    let value = measurement_from_sds(engine, reference, age, sex, method, sds)?;
    Ok(MeasurementReport {
        reference,
        method,
        sex,
        age,
        sds,
        centile: centile_for_sds(sds),
        value,
    })
}

/// Mid-parental height estimate.
pub fn run_midparental_height(
    height_maternal: f64,
    height_paternal: f64,
    sex: Sex,
) -> Result<MidParentalReport> {
    let height = mid_parental_height(height_maternal, height_paternal, sex)?;
    Ok(MidParentalReport {
        sex,
        height_maternal,
        height_paternal,
        height,
    })
}

/// Coverage of the embedded reference tables.
pub fn run_references(registry: &LmsRegistry) -> Vec<Coverage> {
    registry.coverage()
}
