//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an FP-tree and mined recursively over
//! conditional pattern bases, least frequent item first.

pub mod miner;
pub mod tree;

pub use miner::{min_count, mine, FpGrowth, MiningOutput};
pub use tree::FpTree;
