//! Report rendering errors.

use super::error_code::{self, SubgroupErrorCode};

/// Errors that can occur while rendering or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SubgroupErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            _ => error_code::REPORT_ERROR,
        }
    }
}
