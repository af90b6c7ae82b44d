//! Frequent itemset mining configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the FP-Growth miner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support in (0, 1]. Default: 0.05.
    pub min_support: Option<f64>,
    /// Maximum itemset length. Default: unbounded.
    pub max_len: Option<usize>,
    /// Mine top-level items in parallel. Default: false.
    pub parallel: Option<bool>,
}

impl MiningConfig {
    /// Returns the effective minimum support, defaulting to 0.05.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(defaults::DEFAULT_MIN_SUPPORT)
    }

    /// Returns the effective parallelism flag, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
