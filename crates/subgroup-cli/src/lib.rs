//! # subgroup-cli
//!
//! Argument parsing and command execution for the `subgroup` binary.

pub mod cli;
pub mod commands;

pub use cli::{parse_args, Cli, Command};
pub use commands::run_command;
