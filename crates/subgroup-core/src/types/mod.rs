//! Data model for subgroup discovery.
//! Interned item identifiers, transactions, itemsets, and scored rules.

pub mod collections;
pub mod identifiers;
pub mod itemset;
pub mod rule;
pub mod transaction;
pub mod vocabulary;

pub use collections::{FxHashMap, FxHashSet, ItemList};
pub use identifiers::ItemId;
pub use itemset::Itemset;
pub use rule::Rule;
pub use transaction::Transaction;
pub use vocabulary::{ItemVocabulary, ItemVocabularyBuilder};
