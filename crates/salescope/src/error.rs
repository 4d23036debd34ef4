//! Error types for the Salescope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Salescope operations.
#[derive(Debug, Error)]
pub enum SalescopeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid delimited table.
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns missing from the header row.
    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A column contains a value that cannot be coerced to its required type.
    #[error("Column '{column}' is not coercible to {expected}: row {row} has value '{value}'")]
    Coercion {
        column: String,
        expected: &'static str,
        row: usize,
        value: String,
    },

    /// No data rows to analyze.
    #[error("Empty table: {0}")]
    EmptyTable(String),

    /// Chart or document generation failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Mail transport failure.
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Salescope operations.
pub type Result<T> = std::result::Result<T, SalescopeError>;
