//! # subgroup-mining
//!
//! 4-stage subgroup discovery: transaction encoding → FP-Growth mining →
//! rule generation → rule reduction. Surrounded by a thin preparation layer
//! (delimited loading, pluggable discretization) and report rendering.

pub mod encoding;
pub mod fpgrowth;
pub mod pipeline;
pub mod preparation;
pub mod reduction;
pub mod reporters;
pub mod rules;

pub use encoding::{EncodedTransactions, TransactionEncoder};
pub use fpgrowth::{mine, FpGrowth, MiningOutput};
pub use pipeline::{DiscoveryDiagnostics, DiscoveryPipeline, DiscoveryResult};
pub use preparation::TabularDataset;
pub use reduction::{reduce, RuleReducer};
pub use rules::{generate, RuleGenerator};
