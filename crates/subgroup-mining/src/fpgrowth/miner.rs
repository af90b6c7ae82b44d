//! FP-Growth frequent itemset mining.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use subgroup_core::config::MiningConfig;
use subgroup_core::errors::MiningError;
use subgroup_core::tracing::spans::SPAN_MINE;
use subgroup_core::types::{ItemId, ItemList, Itemset, Transaction};

use super::tree::FpTree;

/// Frequent itemsets plus the numbers needed to interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningOutput {
    /// Every frequent itemset, in canonical order (length, then item ids).
    pub itemsets: Vec<Itemset>,
    /// Number of transactions mined.
    pub transaction_count: u64,
    /// Number of single items that reached the threshold.
    pub frequent_items: usize,
    /// Absolute count equivalent of the support threshold.
    pub min_count: u64,
}

impl MiningOutput {
    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }
}

/// FP-Growth miner.
#[derive(Debug, Clone)]
pub struct FpGrowth {
    min_support: f64,
    max_len: Option<usize>,
    parallel: bool,
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    min_count: u64,
    max_len: usize,
}

impl FpGrowth {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            max_len: None,
            parallel: false,
        }
    }

    pub fn from_config(config: &MiningConfig) -> Self {
        Self {
            min_support: config.effective_min_support(),
            max_len: config.max_len,
            parallel: config.effective_parallel(),
        }
    }

    /// Bound the length of mined itemsets.
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Mine top-level items on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        MiningError::check_support("min_support", self.min_support)?;
        if let Some(max_len) = self.max_len {
            MiningError::check_positive("max_len", max_len as u64)?;
        }
        Ok(())
    }

    /// Mine every itemset whose support reaches the threshold.
    ///
    /// Parameters are validated before any work; an empty transaction list
    /// yields an empty output.
    pub fn mine(&self, transactions: &[Transaction]) -> Result<MiningOutput, MiningError> {
        self.validate()?;
        let _span = tracing::info_span!(
            SPAN_MINE,
            transactions = transactions.len(),
            min_support = self.min_support
        )
        .entered();

        let total = transactions.len() as u64;
        if total == 0 {
            tracing::info!("no transactions to mine");
            return Ok(MiningOutput::default());
        }

        let limits = Limits {
            min_count: min_count(self.min_support, total),
            max_len: self.max_len.unwrap_or(usize::MAX),
        };
        let paths: Vec<(&[ItemId], u64)> = transactions.iter().map(|t| (t.items(), 1)).collect();
        let tree = FpTree::build(&paths, limits.min_count);
        let frequent_items = tree.header().len();
        tracing::debug!(
            min_count = limits.min_count,
            frequent_items,
            nodes = tree.node_count(),
            "built FP-tree"
        );

        let found = if tree.single_path().is_some() || !self.parallel {
            let mut found = Vec::new();
            mine_tree(&tree, &[], limits, &mut found);
            found
        } else {
            (0..tree.header().len())
                .into_par_iter()
                .flat_map_iter(|index| {
                    let mut found = Vec::new();
                    mine_item(&tree, index, &[], limits, &mut found);
                    found
                })
                .collect()
        };

        let mut itemsets: Vec<Itemset> = found
            .into_iter()
            .map(|(items, count)| Itemset::new(items, count, total))
            .collect();
        itemsets.sort_by(Itemset::canonical_cmp);

        tracing::info!(
            frequent_items,
            itemsets = itemsets.len(),
            "mined frequent itemsets"
        );
        Ok(MiningOutput {
            itemsets,
            transaction_count: total,
            frequent_items,
            min_count: limits.min_count,
        })
    }
}

/// Mine `transactions` with default options.
pub fn mine(transactions: &[Transaction], min_support: f64) -> Result<MiningOutput, MiningError> {
    FpGrowth::new(min_support).mine(transactions)
}

/// Smallest count `c` with `c / total >= min_support`.
pub fn min_count(min_support: f64, total: u64) -> u64 {
    let passes = |c: u64| c as f64 / total as f64 >= min_support;
    let mut count = (min_support * total as f64).floor() as u64;
    while count > 0 && passes(count - 1) {
        count -= 1;
    }
    while !passes(count) {
        count += 1;
    }
    count.max(1)
}

fn mine_tree(tree: &FpTree, suffix: &[ItemId], limits: Limits, out: &mut Vec<(ItemList, u64)>) {
    if let Some(path) = tree.single_path() {
        let mut chosen = ItemList::new();
        emit_path_subsets(&path, 0, &mut chosen, suffix, limits.max_len, out);
        return;
    }
    // Least frequent first.
    for index in (0..tree.header().len()).rev() {
        mine_item(tree, index, suffix, limits, out);
    }
}

fn mine_item(
    tree: &FpTree,
    index: usize,
    suffix: &[ItemId],
    limits: Limits,
    out: &mut Vec<(ItemList, u64)>,
) {
    let entry = &tree.header()[index];
    let mut itemset: ItemList = suffix.iter().copied().collect();
    itemset.push(entry.item);
    out.push((itemset.clone(), entry.count));
    if itemset.len() >= limits.max_len {
        return;
    }

    let base = tree.conditional_base(index);
    let conditional = FpTree::build(&base, limits.min_count);
    if !conditional.is_empty() {
        mine_tree(&conditional, &itemset, limits, out);
    }
}

/// Emit every non-empty subset of a single path joined with `suffix`.
/// Counts never increase down a path, so a subset's count is the count of
/// its deepest node.
fn emit_path_subsets(
    path: &[(ItemId, u64)],
    from: usize,
    chosen: &mut ItemList,
    suffix: &[ItemId],
    max_len: usize,
    out: &mut Vec<(ItemList, u64)>,
) {
    if suffix.len() + chosen.len() >= max_len {
        return;
    }
    for (offset, &(item, count)) in path[from..].iter().enumerate() {
        chosen.push(item);
        let mut items = chosen.clone();
        items.extend_from_slice(suffix);
        out.push((items, count));
        emit_path_subsets(path, from + offset + 1, chosen, suffix, max_len, out);
        chosen.pop();
    }
}
