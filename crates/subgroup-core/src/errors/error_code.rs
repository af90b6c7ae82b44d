//! SubgroupErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// error code string alongside its human-readable message.
pub trait SubgroupErrorCode {
    /// Returns the error code string (e.g., "INVALID_PARAMETER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const MALFORMED_ROW: &str = "MALFORMED_ROW";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const IO_ERROR: &str = "IO_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
