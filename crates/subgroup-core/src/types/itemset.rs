//! Frequent itemsets.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::collections::{is_sorted_subset, normalize_items, ItemList};
use super::identifiers::ItemId;

/// A set of items together with its absolute and relative support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itemset {
    /// Sorted, duplicate-free items.
    pub items: ItemList,
    /// Number of transactions containing every item.
    pub count: u64,
    /// `count / total transactions`.
    pub support: f64,
}

impl Itemset {
    /// Build an itemset; `total` is the number of transactions mined.
    pub fn new(mut items: ItemList, count: u64, total: u64) -> Self {
        normalize_items(&mut items);
        let support = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        Self {
            items,
            count,
            support,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Whether this itemset is a (not necessarily proper) subset of `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        is_sorted_subset(&self.items, &other.items)
    }

    /// Canonical order: shorter itemsets first, then by item ids.
    pub fn canonical_cmp(&self, other: &Itemset) -> Ordering {
        self.items
            .len()
            .cmp(&other.items.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}
