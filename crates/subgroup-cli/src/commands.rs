//! Command execution.

use std::path::{Path, PathBuf};

use anyhow::Context;
use subgroup_core::errors::{ReportError, SubgroupErrorCode};
use subgroup_core::SubgroupConfig;
use subgroup_mining::preparation::DelimitedReader;
use subgroup_mining::reporters::reporter_from_config;
use subgroup_mining::DiscoveryPipeline;

use crate::cli::{Cli, Command, DiscoverArgs, PrepareArgs, ShowConfigArgs};

/// Run the parsed command.
pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Discover(args) => discover(&args, cli.quiet),
        Command::Prepare(args) => prepare(&args, cli.quiet),
        Command::ShowConfig(args) => show_config(&args),
    }
}

fn config_root(dir: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir().context("cannot determine current directory"),
    }
}

fn discover(args: &DiscoverArgs, quiet: bool) -> anyhow::Result<()> {
    let root = config_root(args.config.as_ref())?;
    let config = SubgroupConfig::load(&root, Some(&args.overrides()))?;

    let dataset = DelimitedReader::from_config(&config.preparation).read_path(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "loaded input"
    );

    let reporter = reporter_from_config(&config.output)?;
    let pipeline = DiscoveryPipeline::new(config);
    let result = pipeline.run_dataset(&dataset)?;
    let data = &result.data;

    let rules = reporter.render_rules(&data.reduced_rules, &data.vocabulary)?;
    match &args.output {
        Some(path) => write_report(path, &rules)?,
        None => print!("{rules}"),
    }
    if let Some(path) = &args.itemsets {
        let itemsets = reporter.render_itemsets(&data.itemsets, &data.vocabulary)?;
        write_report(path, &itemsets)?;
    }

    if !quiet {
        eprintln!("{}", data.diagnostics);
        for warning in &result.warnings {
            eprintln!("warning: {}", warning.coded_string());
        }
    }
    Ok(())
}

fn prepare(args: &PrepareArgs, quiet: bool) -> anyhow::Result<()> {
    let root = config_root(args.config.as_ref())?;
    let config = SubgroupConfig::load(&root, Some(&args.overrides()))?;
    let delimiter = config.preparation.effective_delimiter();

    let dataset = DelimitedReader::from_config(&config.preparation).read_path(&args.input)?;
    let pipeline = DiscoveryPipeline::new(config);
    let prepared = pipeline.prepare(&dataset)?;
    tracing::info!(
        rows = prepared.data.len(),
        columns = prepared.data.columns().len(),
        "prepared table"
    );

    let table = prepared.data.to_delimited(delimiter);
    match &args.output {
        Some(path) => write_report(path, &table)?,
        None => print!("{table}"),
    }
    if !quiet {
        for warning in &prepared.warnings {
            eprintln!("warning: {}", warning.coded_string());
        }
    }
    Ok(())
}

fn show_config(args: &ShowConfigArgs) -> anyhow::Result<()> {
    let root = config_root(args.config.as_ref())?;
    let config = SubgroupConfig::load(&root, None)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })
}
