//! Error handling for the subgroup engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod mining_error;
pub mod pipeline_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::SubgroupErrorCode;
pub use mining_error::MiningError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
