//! Rule reduction configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for threshold filtering and redundancy elimination.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReductionConfig {
    /// Minimum confidence kept after reduction. Default: 0.8.
    pub confidence_threshold: Option<f64>,
    /// Minimum number of supporting transactions. Default: 1.
    #[serde(alias = "min_courses")]
    pub min_coverage: Option<u64>,
    /// Check redundancy in parallel. Default: false.
    pub parallel: Option<bool>,
}

impl ReductionConfig {
    /// Returns the effective confidence threshold, defaulting to 0.8.
    pub fn effective_confidence_threshold(&self) -> f64 {
        self.confidence_threshold
            .unwrap_or(defaults::DEFAULT_CONFIDENCE_THRESHOLD)
    }

    /// Returns the effective minimum coverage, defaulting to 1.
    pub fn effective_min_coverage(&self) -> u64 {
        self.min_coverage.unwrap_or(defaults::DEFAULT_MIN_COVERAGE)
    }

    /// Returns the effective parallelism flag, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
