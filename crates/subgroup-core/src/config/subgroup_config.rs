//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MiningConfig, OutputConfig, PreparationConfig, ReductionConfig, RuleConfig};
use crate::errors::ConfigError;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "subgroup.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SUBGROUP_*`)
/// 3. Project config (`subgroup.toml` in project root)
/// 4. User config (`~/.subgroup/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubgroupConfig {
    pub preparation: PreparationConfig,
    pub mining: MiningConfig,
    pub rules: RuleConfig,
    pub reduction: ReductionConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_support: Option<f64>,
    pub max_len: Option<usize>,
    pub parallel: Option<bool>,
    pub min_confidence: Option<f64>,
    pub min_lift: Option<f64>,
    pub max_antecedent_size: Option<usize>,
    pub confidence_threshold: Option<f64>,
    pub min_coverage: Option<u64>,
    pub target_columns: Vec<String>,
    pub delimiter: Option<char>,
    pub format: Option<String>,
}

impl SubgroupConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SubgroupConfig) -> Result<(), ConfigError> {
        if let Some(support) = config.mining.min_support {
            if support.is_nan() || support <= 0.0 || support > 1.0 {
                return Err(validation("mining.min_support", "must be in (0.0, 1.0]"));
            }
        }
        if config.mining.max_len == Some(0) {
            return Err(validation("mining.max_len", "must be at least 1"));
        }
        if let Some(confidence) = config.rules.min_confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(validation("rules.min_confidence", "must be between 0.0 and 1.0"));
            }
        }
        if let Some(lift) = config.rules.min_lift {
            if !lift.is_finite() || lift < 0.0 {
                return Err(validation("rules.min_lift", "must be a finite value >= 0.0"));
            }
        }
        if config.rules.max_antecedent_size == Some(0) {
            return Err(validation("rules.max_antecedent_size", "must be at least 1"));
        }
        if let Some(threshold) = config.reduction.confidence_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(validation(
                    "reduction.confidence_threshold",
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        if config.reduction.min_coverage == Some(0) {
            return Err(validation("reduction.min_coverage", "must be at least 1"));
        }
        for flag in &config.preparation.derive_flags {
            if flag.name.trim().is_empty() {
                return Err(validation("preparation.derive_flags.name", "must not be empty"));
            }
            if flag.when.is_empty() {
                return Err(validation(
                    "preparation.derive_flags.when",
                    "needs at least one condition",
                ));
            }
        }
        for entry in &config.preparation.discretize {
            if let Err((field, reason)) = entry.check() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("preparation.discretize.{field}"),
                    message: format!("{reason} (column '{}')", entry.column),
                });
            }
        }
        if let Some(format) = config.output.format.as_deref() {
            if !["csv", "tsv", "json", "console"].contains(&format) {
                return Err(validation(
                    "output.format",
                    "must be one of csv, tsv, json, console",
                ));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.subgroup/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".subgroup").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SubgroupConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SubgroupConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SubgroupConfig, other: &SubgroupConfig) {
        // Preparation
        if !other.preparation.target_columns.is_empty() {
            base.preparation.target_columns = other.preparation.target_columns.clone();
        }
        if !other.preparation.drop_columns.is_empty() {
            base.preparation.drop_columns = other.preparation.drop_columns.clone();
        }
        if !other.preparation.rename_columns.is_empty() {
            base.preparation.rename_columns = other.preparation.rename_columns.clone();
        }
        if other.preparation.delimiter.is_some() {
            base.preparation.delimiter = other.preparation.delimiter;
        }
        if !other.preparation.na_values.is_empty() {
            base.preparation.na_values = other.preparation.na_values.clone();
        }
        if !other.preparation.derive_flags.is_empty() {
            base.preparation.derive_flags = other.preparation.derive_flags.clone();
        }
        if !other.preparation.discretize.is_empty() {
            base.preparation.discretize = other.preparation.discretize.clone();
        }

        // Mining
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.max_len.is_some() {
            base.mining.max_len = other.mining.max_len;
        }
        if other.mining.parallel.is_some() {
            base.mining.parallel = other.mining.parallel;
        }

        // Rules
        if other.rules.min_confidence.is_some() {
            base.rules.min_confidence = other.rules.min_confidence;
        }
        if other.rules.min_lift.is_some() {
            base.rules.min_lift = other.rules.min_lift;
        }
        if other.rules.max_antecedent_size.is_some() {
            base.rules.max_antecedent_size = other.rules.max_antecedent_size;
        }

        // Reduction
        if other.reduction.confidence_threshold.is_some() {
            base.reduction.confidence_threshold = other.reduction.confidence_threshold;
        }
        if other.reduction.min_coverage.is_some() {
            base.reduction.min_coverage = other.reduction.min_coverage;
        }
        if other.reduction.parallel.is_some() {
            base.reduction.parallel = other.reduction.parallel;
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.item_separator.is_some() {
            base.output.item_separator = other.output.item_separator.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SUBGROUP_MIN_SUPPORT`, `SUBGROUP_CONFIDENCE_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut SubgroupConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<f64>("SUBGROUP_MIN_SUPPORT")? {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SUBGROUP_MAX_LEN")? {
            config.mining.max_len = Some(v);
        }
        if let Some(v) = env_parse::<bool>("SUBGROUP_PARALLEL")? {
            config.mining.parallel = Some(v);
            config.reduction.parallel = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SUBGROUP_MIN_CONFIDENCE")? {
            config.rules.min_confidence = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SUBGROUP_MIN_LIFT")? {
            config.rules.min_lift = Some(v);
        }
        if let Some(v) = env_parse::<usize>("SUBGROUP_MAX_ANTECEDENT_SIZE")? {
            config.rules.max_antecedent_size = Some(v);
        }
        if let Some(v) = env_parse::<f64>("SUBGROUP_CONFIDENCE_THRESHOLD")? {
            config.reduction.confidence_threshold = Some(v);
        }
        if let Some(v) = env_parse::<u64>("SUBGROUP_MIN_COVERAGE")? {
            config.reduction.min_coverage = Some(v);
        }
        if let Ok(val) = std::env::var("SUBGROUP_TARGET_COLUMNS") {
            let columns: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
            if !columns.is_empty() {
                config.preparation.target_columns = columns;
            }
        }
        if let Ok(val) = std::env::var("SUBGROUP_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SubgroupConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = cli.max_len {
            config.mining.max_len = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.mining.parallel = Some(v);
            config.reduction.parallel = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.rules.min_confidence = Some(v);
        }
        if let Some(v) = cli.min_lift {
            config.rules.min_lift = Some(v);
        }
        if let Some(v) = cli.max_antecedent_size {
            config.rules.max_antecedent_size = Some(v);
        }
        if let Some(v) = cli.confidence_threshold {
            config.reduction.confidence_threshold = Some(v);
        }
        if let Some(v) = cli.min_coverage {
            config.reduction.min_coverage = Some(v);
        }
        if !cli.target_columns.is_empty() {
            config.preparation.target_columns = cli.target_columns.clone();
        }
        if let Some(v) = cli.delimiter {
            config.preparation.delimiter = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Read and parse an environment variable. Unset is `Ok(None)`;
/// an unparsable value is an `InvalidValue` error.
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse '{val}'"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
