//! Pipeline errors and non-fatal error collection.

use super::error_code::SubgroupErrorCode;
use super::{ConfigError, DataError, MiningError, ReportError};

/// Errors that can occur during pipeline execution.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl SubgroupErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

/// Result of a pipeline run that accumulates non-fatal problems.
/// Partial results are returned even when some rows are skipped.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal problems collected during the run.
    pub warnings: Vec<DataError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new result without warnings.
    pub fn new(data: T) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    /// Record a non-fatal problem.
    pub fn add_warning(&mut self, warning: DataError) {
        self.warnings.push(warning);
    }

    /// Returns true if no warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
