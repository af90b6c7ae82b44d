//! Subgroup CLI
//!
//! # Usage
//!
//! ```bash
//! # Mine rules with the defaults, printing csv to stdout
//! subgroup discover records.csv
//!
//! # Override thresholds and write rules and itemsets to files
//! subgroup discover records.csv --min-support 0.1 --confidence-threshold 0.9 \
//!     --output rules.csv --itemsets itemsets.csv
//!
//! # Show the resolved configuration
//! subgroup show-config
//! ```

use std::process::ExitCode;

use clap::Parser;
use subgroup_cli::{run_command, Cli};
use subgroup_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
