//! Error types for the report pipeline.

use thiserror::Error;

/// Unified error type for loading and report generation.
///
/// Only structural problems are errors: a header missing an expected column,
/// a non-empty value that fails to parse, or an underlying I/O failure. A
/// country with no data is not an error; it flows through as an absent value.
#[derive(Error, Debug)]
pub enum ReportError {
    /// An expected column name is absent from a tabular header.
    #[error("column '{column}' not found in {file}")]
    MissingColumn { column: String, file: String },

    /// The file ended before the header row was reached.
    #[error("{file} ended before the header row")]
    MissingHeader { file: String },

    /// A non-empty field failed numeric parsing.
    #[error("invalid numeric value '{value}' in {file}")]
    InvalidNumber { value: String, file: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
