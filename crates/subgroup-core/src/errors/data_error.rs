//! Data-quality errors raised while loading and encoding records.

use super::error_code::{self, SubgroupErrorCode};

/// Errors that can occur while reading or encoding input records.
/// `MalformedRow`, `MissingColumn` and `EmptyInput` are non-fatal: the
/// pipeline records them as warnings and continues.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SubgroupErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRow { .. } => error_code::MALFORMED_ROW,
            Self::MissingColumn(_) => error_code::MISSING_COLUMN,
            Self::EmptyInput(_) => error_code::EMPTY_INPUT,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
