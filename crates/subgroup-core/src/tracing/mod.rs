//! Observability for the subgroup engine.
//! `tracing` crate with `EnvFilter`, per-stage log levels.

pub mod spans;
pub mod setup;

pub use setup::init_tracing;
