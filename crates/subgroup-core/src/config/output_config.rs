//! Output configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for rule and itemset serialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: "csv" | "tsv" | "json" | "console". Default: "csv".
    pub format: Option<String>,
    /// Separator between items inside one cell. Default: ";".
    pub item_separator: Option<String>,
}

impl OutputConfig {
    /// Returns the effective format, defaulting to "csv".
    pub fn effective_format(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or(defaults::DEFAULT_OUTPUT_FORMAT)
    }

    /// Returns the effective item separator, defaulting to ";".
    pub fn effective_item_separator(&self) -> &str {
        self.item_separator
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ITEM_SEPARATOR)
    }
}
