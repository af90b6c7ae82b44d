//! A single encoded record.

use serde::{Deserialize, Serialize};

use super::collections::is_sorted_subset;
use super::identifiers::ItemId;

/// The set of items derived from one input row.
/// Items are kept sorted and duplicate-free; the set is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Transaction {
    items: Vec<ItemId>,
}

impl Transaction {
    /// Build a transaction, sorting and deduplicating the items.
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Whether every item of the sorted `items` is present.
    pub fn contains_all(&self, items: &[ItemId]) -> bool {
        is_sorted_subset(items, &self.items)
    }
}

impl FromIterator<ItemId> for Transaction {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
