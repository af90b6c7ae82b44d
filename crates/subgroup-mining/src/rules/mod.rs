//! Rule generation: frequent itemsets → scored IF-THEN rules.

pub mod generator;

pub use generator::{generate, RuleGenerator};
