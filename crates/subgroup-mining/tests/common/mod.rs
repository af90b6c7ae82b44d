//! Shared helpers for subgroup-mining integration tests.

#![allow(dead_code)]

use subgroup_core::types::{ItemId, Transaction};

pub fn txn(items: &[u32]) -> Transaction {
    items.iter().map(|&i| ItemId(i)).collect()
}

pub fn ids(items: &[u32]) -> Vec<ItemId> {
    items.iter().map(|&i| ItemId(i)).collect()
}

/// Number of transactions containing every item of sorted `items`.
pub fn count_containing(transactions: &[Transaction], items: &[ItemId]) -> u64 {
    transactions.iter().filter(|t| t.contains_all(items)).count() as u64
}

/// Every itemset over `0..universe` with `count / n >= min_support`, in
/// canonical order (length, then ids).
pub fn brute_force(
    transactions: &[Transaction],
    universe: u32,
    min_support: f64,
) -> Vec<(Vec<ItemId>, u64)> {
    let n = transactions.len();
    if n == 0 {
        return Vec::new();
    }
    let mut found = Vec::new();
    for mask in 1u32..(1 << universe) {
        let items: Vec<ItemId> = (0..universe)
            .filter(|bit| mask & (1 << bit) != 0)
            .map(ItemId)
            .collect();
        let count = count_containing(transactions, &items);
        if count > 0 && count as f64 / n as f64 >= min_support {
            found.push((items, count));
        }
    }
    found.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
    found
}
