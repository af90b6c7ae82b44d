//! Mining, rule generation, and reduction errors.

use super::error_code::{self, SubgroupErrorCode};

/// Errors raised by the mining engine. Only parameter validation is fatal;
/// data problems degrade to warnings and empty results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl MiningError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// `min_support` must lie in (0, 1].
    pub fn check_support(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_nan() || value <= 0.0 || value > 1.0 {
            return Err(Self::invalid(name, value, "must be in (0, 1]"));
        }
        Ok(())
    }

    /// Confidence thresholds must lie in [0, 1].
    pub fn check_unit_interval(name: &'static str, value: f64) -> Result<(), Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Self::invalid(name, value, "must be in [0, 1]"));
        }
        Ok(())
    }

    /// Counts and sizes must be at least 1.
    pub fn check_positive(name: &'static str, value: u64) -> Result<(), Self> {
        if value == 0 {
            return Err(Self::invalid(name, value, "must be at least 1"));
        }
        Ok(())
    }

    /// Lift thresholds must be finite and non-negative.
    pub fn check_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Self::invalid(name, value, "must be a finite value >= 0"));
        }
        Ok(())
    }
}

impl SubgroupErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PARAMETER
    }
}
