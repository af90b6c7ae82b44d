//! # subgroup-core
//!
//! Foundation crate for the subgroup rule discovery engine.
//! Defines items, transactions, itemsets, rules, errors, config, and tracing.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::SubgroupConfig;
pub use errors::{PipelineError, PipelineResult};
pub use types::{ItemId, ItemVocabulary, Itemset, Rule, Transaction};
