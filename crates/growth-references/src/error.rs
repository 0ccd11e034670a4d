use thiserror::Error;

/// Errors raised while loading the embedded reference tables.
///
/// These indicate a defective data file shipped inside the binary, not bad
/// user input, so they are kept separate from `growth_model::GrowthError`.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to parse reference table {name}: {message}")]
    Csv { name: &'static str, message: String },

    #[error("reference table {name} row {row}: {message}")]
    InvalidRow {
        name: &'static str,
        row: usize,
        message: String,
    },

    #[error("reference table {name} has no rows for {key}")]
    EmptyTable { name: &'static str, key: String },
}
