//! Discretizers: explicit bands, equal-width bins, quantile bins.
//!
//! All of them implement [`Discretizer`]; the mining engine only ever sees
//! the resulting labels.

use subgroup_core::config::{DiscretizeConfig, DiscretizeMethod};
use subgroup_core::errors::{ConfigError, DataError};
use subgroup_core::traits::Discretizer;
use subgroup_core::types::FxHashMap;

use super::dataset::TabularDataset;

/// Explicit right-open bands `[edges[i], edges[i + 1])`, one label per band.
/// Values outside every band are missing.
#[derive(Debug, Clone)]
pub struct ManualBins {
    edges: Vec<f64>,
    labels: Vec<String>,
}

impl ManualBins {
    pub fn new(edges: Vec<f64>, labels: Vec<String>) -> Result<Self, ConfigError> {
        if edges.len() < 2 {
            return Err(bins_error("at least two edges are required"));
        }
        if labels.len() != edges.len() - 1 {
            return Err(bins_error("one label per band is required"));
        }
        if edges.iter().any(|e| e.is_nan()) || edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(bins_error("edges must be strictly increasing"));
        }
        Ok(Self { edges, labels })
    }

    fn label_of(&self, value: f64) -> Option<String> {
        self.edges
            .windows(2)
            .position(|w| value >= w[0] && value < w[1])
            .map(|band| self.labels[band].clone())
    }
}

impl Discretizer for ManualBins {
    fn name(&self) -> &str {
        "manual"
    }

    fn labels(&self, values: &[Option<f64>]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| v.and_then(|v| self.label_of(v)))
            .collect()
    }
}

/// `bins` equal-width bins between the observed minimum and maximum.
/// Fewer than two distinct values leaves every value missing.
#[derive(Debug, Clone)]
pub struct EqualWidth {
    bins: usize,
    labels: Vec<String>,
}

impl EqualWidth {
    pub fn new(bins: usize) -> Result<Self, ConfigError> {
        if bins == 0 {
            return Err(bins_error("bin count must be at least 1"));
        }
        Ok(Self {
            bins,
            labels: default_labels(bins),
        })
    }

    pub fn with_labels(labels: Vec<String>) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(bins_error("bin count must be at least 1"));
        }
        Ok(Self {
            bins: labels.len(),
            labels,
        })
    }
}

impl Discretizer for EqualWidth {
    fn name(&self) -> &str {
        "equal_width"
    }

    fn labels(&self, values: &[Option<f64>]) -> Vec<Option<String>> {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        if distinct_count(&present) < 2 {
            return vec![None; values.len()];
        }
        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / self.bins as f64;

        values
            .iter()
            .map(|v| {
                v.map(|v| {
                    let bin = (((v - min) / width).floor() as usize).min(self.bins - 1);
                    self.labels[bin].clone()
                })
            })
            .collect()
    }
}

/// Up to `bins` quantile bins. The bin count shrinks to the number of
/// distinct values and duplicate edges are dropped. Bins are right-closed,
/// the first one also includes the minimum.
#[derive(Debug, Clone)]
pub struct QuantileBins {
    bins: usize,
    labels: Vec<String>,
}

impl QuantileBins {
    pub fn new(bins: usize) -> Result<Self, ConfigError> {
        if bins == 0 {
            return Err(bins_error("bin count must be at least 1"));
        }
        Ok(Self {
            bins,
            labels: default_labels(bins),
        })
    }

    pub fn with_labels(labels: Vec<String>) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(bins_error("bin count must be at least 1"));
        }
        Ok(Self {
            bins: labels.len(),
            labels,
        })
    }

    fn edges(&self, sorted: &[f64], bins: usize) -> Vec<f64> {
        let mut edges: Vec<f64> = (0..=bins)
            .map(|i| quantile(sorted, i as f64 / bins as f64))
            .collect();
        edges.dedup();
        edges
    }
}

impl Discretizer for QuantileBins {
    fn name(&self) -> &str {
        "quantile"
    }

    fn labels(&self, values: &[Option<f64>]) -> Vec<Option<String>> {
        let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
        sorted.sort_by(f64::total_cmp);
        let distinct = distinct_count(&sorted);
        if distinct < 2 {
            return vec![None; values.len()];
        }

        let bins = self.bins.min(distinct);
        let edges = self.edges(&sorted, bins);
        let band_count = edges.len() - 1;
        let labels = if band_count == self.labels.len() {
            self.labels.clone()
        } else {
            self.labels
                .iter()
                .take(band_count)
                .cloned()
                .collect::<Vec<_>>()
        };

        values
            .iter()
            .map(|v| {
                v.map(|v| {
                    let band = edges[1..]
                        .iter()
                        .position(|&upper| v <= upper)
                        .unwrap_or(band_count - 1);
                    labels[band].clone()
                })
            })
            .collect()
    }
}

/// Build the discretizer a `[[preparation.discretize]]` entry describes.
/// Without labels, `bins` picks the default label set.
pub fn build_discretizer(config: &DiscretizeConfig) -> Result<Box<dyn Discretizer>, ConfigError> {
    let labels = config.labels.clone();
    let bins = config.bins.unwrap_or(labels.len());
    Ok(match config.method {
        DiscretizeMethod::Manual => Box::new(ManualBins::new(config.edges.clone(), labels)?),
        DiscretizeMethod::EqualWidth if labels.is_empty() => Box::new(EqualWidth::new(bins)?),
        DiscretizeMethod::EqualWidth => Box::new(EqualWidth::with_labels(labels)?),
        DiscretizeMethod::Quantile if labels.is_empty() => Box::new(QuantileBins::new(bins)?),
        DiscretizeMethod::Quantile => Box::new(QuantileBins::with_labels(labels)?),
    })
}

/// Label the values of `column` and append them as `{column}_discretized`.
///
/// With `group_by`, bins are computed separately within each group of rows
/// sharing the same group value (rows with a missing group value form one
/// group of their own).
pub fn discretize_column(
    dataset: &mut TabularDataset,
    column: &str,
    discretizer: &dyn Discretizer,
    group_by: Option<&str>,
) -> Result<(), DataError> {
    let values = dataset.numeric_column(column)?;
    let mut labels: Vec<Option<String>> = vec![None; values.len()];

    match group_by {
        None => labels = discretizer.labels(&values),
        Some(group_column) => {
            let group_idx = dataset
                .column_index(group_column)
                .ok_or_else(|| DataError::MissingColumn(group_column.to_string()))?;
            let mut groups: FxHashMap<Option<&str>, Vec<usize>> = FxHashMap::default();
            for (row_idx, row) in dataset.rows().iter().enumerate() {
                let key = row.get(group_idx).and_then(|c| c.as_deref());
                groups.entry(key).or_default().push(row_idx);
            }
            for rows in groups.values() {
                let group_values: Vec<Option<f64>> = rows.iter().map(|&r| values[r]).collect();
                for (&row_idx, label) in rows.iter().zip(discretizer.labels(&group_values)) {
                    labels[row_idx] = label;
                }
            }
        }
    }

    tracing::debug!(
        column,
        discretizer = discretizer.name(),
        labelled = labels.iter().filter(|l| l.is_some()).count(),
        "discretized column"
    );
    dataset.push_column(format!("{column}_discretized"), labels);
    Ok(())
}

/// `low/high`, `low/medium/high`, or `q1..qN` for other bin counts.
fn default_labels(bins: usize) -> Vec<String> {
    match bins {
        1 => vec!["all".to_string()],
        2 => vec!["low".to_string(), "high".to_string()],
        3 => vec!["low".to_string(), "medium".to_string(), "high".to_string()],
        n => (1..=n).map(|i| format!("q{i}")).collect(),
    }
}

fn distinct_count(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

/// Linear-interpolated quantile of sorted data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn bins_error(message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: "bins".to_string(),
        message: message.to_string(),
    }
}
