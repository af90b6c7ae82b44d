//! Property tests for mining, rule generation and reduction.

use proptest::prelude::*;

use subgroup_core::types::{ItemId, Transaction};
use subgroup_mining::fpgrowth::{mine, FpGrowth};
use subgroup_mining::reduction::RuleReducer;
use subgroup_mining::{generate, reduce};

#[path = "../common/mod.rs"]
mod common;

use common::{brute_force, count_containing};

const UNIVERSE: u32 = 6;
const TARGETS: [ItemId; 2] = [ItemId(4), ItemId(5)];

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        prop::collection::btree_set(0..UNIVERSE, 0..=4),
        0..=10,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|items| items.into_iter().map(ItemId).collect())
            .collect()
    })
}

fn support() -> impl Strategy<Value = f64> {
    (1u32..=20).prop_map(|step| step as f64 / 20.0)
}

proptest! {
    #[test]
    fn prop_matches_brute_force(txns in transactions(), min_support in support()) {
        let mined = mine(&txns, min_support).unwrap();
        let actual: Vec<(Vec<ItemId>, u64)> = mined
            .itemsets
            .iter()
            .map(|s| (s.items.to_vec(), s.count))
            .collect();
        prop_assert_eq!(actual, brute_force(&txns, UNIVERSE, min_support));
    }

    #[test]
    fn prop_anti_monotone(txns in transactions(), min_support in support()) {
        let mined = mine(&txns, min_support).unwrap();
        for itemset in &mined.itemsets {
            for other in &mined.itemsets {
                if other.len() < itemset.len() && other.is_subset_of(itemset) {
                    prop_assert!(other.support >= itemset.support);
                }
            }
        }
    }

    #[test]
    fn prop_parallel_is_identical(txns in transactions(), min_support in support()) {
        let sequential = mine(&txns, min_support).unwrap();
        let parallel = FpGrowth::new(min_support)
            .with_parallel(true)
            .mine(&txns)
            .unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn prop_confidence_identity(txns in transactions(), min_support in support()) {
        let mined = mine(&txns, min_support).unwrap();
        let rules = generate(&mined.itemsets, 0.0, &TARGETS).unwrap();
        for rule in &rules {
            let mut all: Vec<ItemId> = rule.antecedent.to_vec();
            all.extend_from_slice(&rule.consequent);
            all.sort();
            let expected = count_containing(&txns, &all) as f64
                / count_containing(&txns, &rule.antecedent) as f64;
            prop_assert!((rule.confidence - expected).abs() < 1e-9);
            prop_assert_eq!(rule.consequent.len(), 1);
            prop_assert!(TARGETS.contains(&rule.consequent[0]));
        }
    }

    #[test]
    fn prop_reduce_idempotent(
        txns in transactions(),
        min_support in support(),
        threshold in 0u32..=10,
        coverage in 1u64..=3,
    ) {
        let threshold = threshold as f64 / 10.0;
        let mined = mine(&txns, min_support).unwrap();
        let rules = generate(&mined.itemsets, 0.0, &TARGETS).unwrap();
        let once = reduce(&rules, threshold, coverage).unwrap();
        let twice = reduce(&once, threshold, coverage).unwrap();
        prop_assert_eq!(&once, &twice);

        let parallel = RuleReducer::new(threshold, coverage)
            .with_parallel(true)
            .reduce(&rules)
            .unwrap();
        prop_assert_eq!(&once, &parallel);
    }

    #[test]
    fn prop_reduced_rules_not_mutually_redundant(
        txns in transactions(),
        min_support in support(),
    ) {
        let mined = mine(&txns, min_support).unwrap();
        let rules = generate(&mined.itemsets, 0.0, &TARGETS).unwrap();
        let reduced = reduce(&rules, 0.0, 1).unwrap();
        for (i, a) in reduced.iter().enumerate() {
            for (j, b) in reduced.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.subsumes(b));
                }
            }
        }
    }
}

#[test]
fn empty_transactions_yield_empty_outputs() {
    let mined = mine(&[], 0.5).unwrap();
    assert!(mined.is_empty());
    let rules = generate(&mined.itemsets, 0.6, &TARGETS).unwrap();
    assert!(rules.is_empty());
    assert!(reduce(&rules, 0.8, 1).unwrap().is_empty());
}
