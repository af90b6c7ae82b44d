//! Rule generation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for association-rule generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum confidence in [0, 1]. Default: 0.6.
    pub min_confidence: Option<f64>,
    /// Optional minimum lift. Default: no lift filter.
    pub min_lift: Option<f64>,
    /// Maximum antecedent size. Default: unbounded.
    pub max_antecedent_size: Option<usize>,
}

impl RuleConfig {
    /// Returns the effective minimum confidence, defaulting to 0.6.
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(defaults::DEFAULT_MIN_CONFIDENCE)
    }
}
