//! Scored IF-THEN rules.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::collections::{is_sorted_subset, ItemList};
use super::vocabulary::ItemVocabulary;

/// An association rule `antecedent → consequent` with its statistics.
///
/// Rules are never mutated after generation; reduction only keeps or
/// drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Sorted antecedent items (the IF part).
    pub antecedent: ItemList,
    /// Sorted consequent items (the THEN part), disjoint from the antecedent.
    pub consequent: ItemList,
    /// Support of `antecedent ∪ consequent`.
    pub support: f64,
    /// `support / support(antecedent)`.
    pub confidence: f64,
    /// `confidence / support(consequent)`.
    pub lift: f64,
    /// Number of transactions containing `antecedent ∪ consequent`.
    pub support_count: u64,
}

impl Rule {
    /// Whether `self` is strictly more general than `other`: a proper
    /// subset antecedent predicting the same consequent.
    pub fn generalizes(&self, other: &Rule) -> bool {
        self.consequent == other.consequent
            && self.antecedent.len() < other.antecedent.len()
            && is_sorted_subset(&self.antecedent, &other.antecedent)
    }

    /// Whether `self` makes `other` redundant: strictly more general and at
    /// least as confident. Equal confidence favours the shorter rule.
    pub fn subsumes(&self, other: &Rule) -> bool {
        self.generalizes(other) && self.confidence >= other.confidence
    }

    /// Generation order: antecedent size, antecedent ids, consequent ids.
    pub fn emission_cmp(&self, other: &Rule) -> Ordering {
        self.antecedent
            .len()
            .cmp(&other.antecedent.len())
            .then_with(|| self.antecedent.cmp(&other.antecedent))
            .then_with(|| self.consequent.cmp(&other.consequent))
    }

    /// Human-readable form: `IF a AND b THEN t`.
    pub fn describe(&self, vocabulary: &ItemVocabulary) -> String {
        format!(
            "IF {} THEN {}",
            vocabulary.names_of(&self.antecedent).join(" AND "),
            vocabulary.names_of(&self.consequent).join(" AND "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;
    use smallvec::smallvec;

    fn rule(antecedent: &[u32], consequent: u32, confidence: f64) -> Rule {
        Rule {
            antecedent: antecedent.iter().map(|&i| ItemId(i)).collect(),
            consequent: smallvec![ItemId(consequent)],
            support: 0.5,
            confidence,
            lift: 1.0,
            support_count: 2,
        }
    }

    #[test]
    fn shorter_equal_confidence_rule_subsumes() {
        let general = rule(&[1], 9, 0.8);
        let specific = rule(&[1, 2], 9, 0.8);
        assert!(general.subsumes(&specific));
        assert!(!specific.subsumes(&general));
    }

    #[test]
    fn less_confident_general_rule_does_not_subsume() {
        let general = rule(&[1], 9, 0.75);
        let specific = rule(&[1, 2], 9, 1.0);
        assert!(general.generalizes(&specific));
        assert!(!general.subsumes(&specific));
    }

    #[test]
    fn different_consequent_never_subsumes() {
        let general = rule(&[1], 8, 1.0);
        let specific = rule(&[1, 2], 9, 0.5);
        assert!(!general.subsumes(&specific));
    }

    #[test]
    fn identical_antecedent_is_not_more_general() {
        let a = rule(&[1, 2], 9, 0.9);
        let b = rule(&[1, 2], 9, 0.8);
        assert!(!a.subsumes(&b));
    }
}
