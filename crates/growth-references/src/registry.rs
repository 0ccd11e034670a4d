//! Registry of embedded LMS reference tables.
//!
//! The tables ship inside the binary as CSV and are parsed once at startup.
//! The loaded registry is immutable, so concurrent lookups from many
//! invocations are safe.

use std::collections::HashMap;

use growth_core::engine::ReferenceEngine;
use growth_model::{GrowthError, MeasurementMethod, Reference, Sex};

use crate::error::ReferenceDataError;
use crate::lms::LmsParams;
use crate::table::{LmsPoint, LmsTable};

const UK_WHO_CSV: &str = include_str!("../data/uk_who.csv");
const TRISOMY_21_CSV: &str = include_str!("../data/trisomy_21.csv");
const TURNERS_SYNDROME_CSV: &str = include_str!("../data/turners_syndrome.csv");

type TableKey = (Reference, Sex, MeasurementMethod);

/// One embedded CSV row.
#[derive(Debug, serde::Deserialize)]
struct LmsRow {
    method: String,
    sex: String,
    age: f64,
    l: f64,
    m: f64,
    s: f64,
}

/// Supported age span for one (reference, method, sex) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub reference: Reference,
    pub method: MeasurementMethod,
    pub sex: Sex,
    pub min_age: f64,
    pub max_age: f64,
}

/// All embedded reference tables, keyed by (reference, sex, method).
///
/// Coverage is deliberately uneven, matching the shape of the published
/// references: Turner syndrome carries female height only, and OFC grids stop
/// short of the height/weight/BMI ranges.
#[derive(Debug, Clone)]
pub struct LmsRegistry {
    tables: HashMap<TableKey, LmsTable>,
}

impl LmsRegistry {
    /// Parses the embedded tables.
    pub fn embedded() -> Result<Self, ReferenceDataError> {
        let mut tables = HashMap::new();
        load_reference(&mut tables, Reference::UkWho, "uk_who.csv", UK_WHO_CSV)?;
        load_reference(
            &mut tables,
            Reference::Trisomy21,
            "trisomy_21.csv",
            TRISOMY_21_CSV,
        )?;
        load_reference(
            &mut tables,
            Reference::TurnersSyndrome,
            "turners_syndrome.csv",
            TURNERS_SYNDROME_CSV,
        )?;
        Ok(Self { tables })
    }

    fn table(
        &self,
        reference: Reference,
        sex: Sex,
        method: MeasurementMethod,
    ) -> Option<&LmsTable> {
        self.tables.get(&(reference, sex, method))
    }

    fn params(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
    ) -> growth_model::Result<LmsParams> {
        self.table(reference, sex, method)
            .and_then(|table| table.params_at(age))
            .ok_or(GrowthError::ReferenceDataUnavailable {
                reference,
                method,
                sex,
                age,
            })
    }

    /// Lists every loaded table with its supported age range, in a stable
    /// order for display.
    pub fn coverage(&self) -> Vec<Coverage> {
        let mut entries: Vec<Coverage> = self
            .tables
            .iter()
            .filter_map(|(&(reference, sex, method), table)| {
                let (min_age, max_age) = table.age_range()?;
                Some(Coverage {
                    reference,
                    method,
                    sex,
                    min_age,
                    max_age,
                })
            })
            .collect();
        entries.sort_by_key(|c| (c.reference.as_str(), c.method.as_str(), c.sex.as_str()));
        entries
    }
}

impl ReferenceEngine for LmsRegistry {
    fn lookup_sds(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        observation_value: f64,
    ) -> growth_model::Result<f64> {
        let params = self.params(reference, method, sex, age)?;
        Ok(params.z_score(observation_value))
    }

    fn invert_to_measurement(
        &self,
        reference: Reference,
        method: MeasurementMethod,
        sex: Sex,
        age: f64,
        target_sds: f64,
    ) -> growth_model::Result<f64> {
        let params = self.params(reference, method, sex, age)?;
        Ok(params.measurement(target_sds))
    }
}

fn load_reference(
    tables: &mut HashMap<TableKey, LmsTable>,
    reference: Reference,
    name: &'static str,
    csv_text: &str,
) -> Result<(), ReferenceDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let mut grids: HashMap<TableKey, Vec<LmsPoint>> = HashMap::new();
    for (index, record) in reader.deserialize::<LmsRow>().enumerate() {
        // Header is row 1; data rows start at 2.
        let row_number = index + 2;
        let row = record.map_err(|e| ReferenceDataError::Csv {
            name,
            message: e.to_string(),
        })?;
        let method: MeasurementMethod =
            row.method
                .parse()
                .map_err(|e: GrowthError| ReferenceDataError::InvalidRow {
                    name,
                    row: row_number,
                    message: e.to_string(),
                })?;
        let sex: Sex = row
            .sex
            .parse()
            .map_err(|e: GrowthError| ReferenceDataError::InvalidRow {
                name,
                row: row_number,
                message: e.to_string(),
            })?;
        if !(row.age.is_finite() && row.m > 0.0 && row.s > 0.0) {
            return Err(ReferenceDataError::InvalidRow {
                name,
                row: row_number,
                message: format!("implausible LMS row: age {} m {} s {}", row.age, row.m, row.s),
            });
        }
        grids.entry((reference, sex, method)).or_default().push(LmsPoint {
            age: row.age,
            l: row.l,
            m: row.m,
            s: row.s,
        });
    }

    if grids.is_empty() {
        return Err(ReferenceDataError::EmptyTable {
            name,
            key: reference.to_string(),
        });
    }
    for (key, points) in grids {
        tables.insert(key, LmsTable::new(points));
    }
    Ok(())
}
