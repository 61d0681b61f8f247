//! Error types for ciede2000

use thiserror::Error;

/// Result type for ciede2000 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or writing color rows
///
/// The ΔE2000 kernel itself has no error path.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Row has the wrong number of comma-separated fields
    #[error("Expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// Field is not a decimal number
    #[error("Field {field} is not a number: {value:?}")]
    ParseFloat { field: usize, value: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
