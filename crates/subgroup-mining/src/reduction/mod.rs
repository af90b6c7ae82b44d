//! Rule reduction: confidence/coverage filtering and subsumption pruning.

pub mod reducer;

pub use reducer::{reduce, RuleReducer};
