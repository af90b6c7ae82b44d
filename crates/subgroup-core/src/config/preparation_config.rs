//! Data preparation configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for loading and encoding tabular input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreparationConfig {
    /// Boolean target-class columns.
    /// Default: onlyregistered, Onlyviewed, Onlyexplored.
    #[serde(default)]
    pub target_columns: Vec<String>,
    /// Columns dropped before encoding, after flags and bins are derived.
    #[serde(default)]
    pub drop_columns: Vec<String>,
    /// Column renames applied after dropping (old name → new name).
    #[serde(default)]
    pub rename_columns: BTreeMap<String, String>,
    /// Field delimiter of the input file. Default: ','.
    pub delimiter: Option<char>,
    /// Cell values treated as missing. Default: "", NA, NaN, nan.
    #[serde(default)]
    pub na_values: Vec<String>,
    /// 0/1 columns derived from other columns. Derived first, so they may
    /// read columns listed in `drop_columns`.
    #[serde(default)]
    pub derive_flags: Vec<DerivedFlagConfig>,
    /// Numeric columns replaced by bin labels, applied after the derived
    /// flags. Renames see the `{column}_discretized` names.
    #[serde(default)]
    pub discretize: Vec<DiscretizeConfig>,
}

/// A flag column that is `1` when every listed column holds the listed value
/// and `0` otherwise. Values compare numerically when both sides are
/// numbers, so `1.0` matches `"1"`. The listed columns are dropped once every
/// flag is derived unless `keep_sources` is set.
///
/// ```toml
/// [[preparation.derive_flags]]
/// name = "Onlyviewed"
/// when = { viewed = "1", explored = "0", certified = "0" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DerivedFlagConfig {
    pub name: String,
    #[serde(default)]
    pub when: BTreeMap<String, String>,
    pub keep_sources: Option<bool>,
}

impl DerivedFlagConfig {
    pub fn effective_keep_sources(&self) -> bool {
        self.keep_sources.unwrap_or(false)
    }
}

/// Binning policy of one `[[preparation.discretize]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscretizeMethod {
    /// Explicit right-open bands between `edges`, one label per band.
    Manual,
    /// `bins` equal-width bins between the observed minimum and maximum.
    EqualWidth,
    /// Up to `bins` quantile bins.
    Quantile,
}

/// Discretization of one numeric column into `{column}_discretized`.
///
/// ```toml
/// [[preparation.discretize]]
/// column = "nevents"
/// method = "quantile"
/// labels = ["low", "medium", "high"]
/// group_by = "course_id"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizeConfig {
    pub column: String,
    pub method: DiscretizeMethod,
    /// Bin count for `equal_width` and `quantile`. Defaults to the number
    /// of labels when labels are given.
    pub bins: Option<usize>,
    /// Band edges for `manual`. `inf` closes an open-ended last band.
    #[serde(default)]
    pub edges: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Compute bins separately within each group of this column.
    pub group_by: Option<String>,
    /// Keep the raw column next to the labels. Default: false.
    pub keep_source: Option<bool>,
}

impl DiscretizeConfig {
    /// The name of the appended label column.
    pub fn output_column(&self) -> String {
        format!("{}_discretized", self.column)
    }

    pub fn effective_keep_source(&self) -> bool {
        self.keep_source.unwrap_or(false)
    }

    /// Check the fields the method needs. Returns the offending field and
    /// the reason.
    pub fn check(&self) -> Result<(), (&'static str, &'static str)> {
        if self.column.trim().is_empty() {
            return Err(("column", "must not be empty"));
        }
        match self.method {
            DiscretizeMethod::Manual => {
                if self.edges.len() < 2 {
                    return Err(("edges", "manual bins need at least two edges"));
                }
                if self.edges.iter().any(|e| e.is_nan())
                    || self.edges.windows(2).any(|w| w[0] >= w[1])
                {
                    return Err(("edges", "must be strictly increasing"));
                }
                if self.labels.len() != self.edges.len() - 1 {
                    return Err(("labels", "manual bins need one label per band"));
                }
            }
            DiscretizeMethod::EqualWidth | DiscretizeMethod::Quantile => match self.bins {
                Some(0) => return Err(("bins", "must be at least 1")),
                Some(bins) if !self.labels.is_empty() && bins != self.labels.len() => {
                    return Err(("labels", "must match the bin count"))
                }
                None if self.labels.is_empty() => {
                    return Err(("bins", "set bins or labels"));
                }
                _ => {}
            },
        }
        Ok(())
    }
}

impl PreparationConfig {
    /// Returns the effective target columns.
    pub fn effective_target_columns(&self) -> Vec<String> {
        if self.target_columns.is_empty() {
            defaults::DEFAULT_TARGET_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect()
        } else {
            self.target_columns.clone()
        }
    }

    /// Returns the effective delimiter, defaulting to ','.
    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(defaults::DEFAULT_DELIMITER)
    }

    /// Returns the effective NA tokens.
    pub fn effective_na_values(&self) -> Vec<String> {
        if self.na_values.is_empty() {
            defaults::DEFAULT_NA_VALUES
                .iter()
                .map(|v| v.to_string())
                .collect()
        } else {
            self.na_values.clone()
        }
    }
}
