//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subgroup_core::config::CliOverrides;

/// Subgroup discovery over tabular records
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "subgroup")]
#[command(version)]
#[command(about = "Mine frequent itemsets and non-redundant target-class rules from tabular records")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Suppress the summary printed to stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run encoding, mining, rule generation and reduction on a delimited file
    Discover(DiscoverArgs),

    /// Apply the configured flags, bins, drops and renames and write the table
    Prepare(PrepareArgs),

    /// Print the resolved configuration as TOML
    ShowConfig(ShowConfigArgs),
}

/// Arguments for the discover command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DiscoverArgs {
    /// Delimited input file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write reduced rules here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the frequent itemsets to this file
    #[arg(long, value_name = "FILE")]
    pub itemsets: Option<PathBuf>,

    /// Boolean target-class column (repeatable)
    #[arg(short = 't', long = "target", value_name = "COLUMN")]
    pub targets: Vec<String>,

    /// Minimum itemset support, in (0, 1]
    #[arg(long)]
    pub min_support: Option<f64>,

    /// Maximum itemset length
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Minimum rule confidence at generation
    #[arg(long)]
    pub min_confidence: Option<f64>,

    /// Minimum rule lift at generation
    #[arg(long)]
    pub min_lift: Option<f64>,

    /// Maximum number of antecedent items
    #[arg(long)]
    pub max_antecedent_size: Option<usize>,

    /// Minimum confidence kept by reduction
    #[arg(long)]
    pub confidence_threshold: Option<f64>,

    /// Minimum number of transactions a kept rule must cover
    #[arg(long, alias = "min-courses")]
    pub min_coverage: Option<u64>,

    /// Input field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Report format
    #[arg(short, long, value_parser = ["csv", "tsv", "json", "console"])]
    pub format: Option<String>,

    /// Mine and reduce on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Directory holding subgroup.toml (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

impl DiscoverArgs {
    /// Flags that override file and environment configuration.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            min_support: self.min_support,
            max_len: self.max_len,
            parallel: self.parallel.then_some(true),
            min_confidence: self.min_confidence,
            min_lift: self.min_lift,
            max_antecedent_size: self.max_antecedent_size,
            confidence_threshold: self.confidence_threshold,
            min_coverage: self.min_coverage,
            target_columns: self.targets.clone(),
            delimiter: self.delimiter,
            format: self.format.clone(),
        }
    }
}

/// Arguments for the prepare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PrepareArgs {
    /// Delimited input file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the prepared table here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input and output field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Directory holding subgroup.toml (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

impl PrepareArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            delimiter: self.delimiter,
            ..CliOverrides::default()
        }
    }
}

/// Arguments for the show-config command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ShowConfigArgs {
    /// Directory holding subgroup.toml (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

/// Parse arguments from an iterator (used by tests).
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
