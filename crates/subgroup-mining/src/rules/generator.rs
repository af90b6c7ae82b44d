//! Association rule generation from frequent itemsets.

use subgroup_core::config::RuleConfig;
use subgroup_core::errors::MiningError;
use subgroup_core::tracing::spans::SPAN_GENERATE;
use subgroup_core::types::{FxHashMap, FxHashSet, ItemId, ItemList, Itemset, Rule};

/// Splits frequent itemsets into scored `antecedent → target` rules.
///
/// Only single target items are allowed as consequents, so each itemset
/// yields at most one rule per target item it contains.
#[derive(Debug, Clone)]
pub struct RuleGenerator {
    min_confidence: f64,
    min_lift: Option<f64>,
    max_antecedent_size: Option<usize>,
}

impl RuleGenerator {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence,
            min_lift: None,
            max_antecedent_size: None,
        }
    }

    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            min_confidence: config.effective_min_confidence(),
            min_lift: config.min_lift,
            max_antecedent_size: config.max_antecedent_size,
        }
    }

    pub fn with_min_lift(mut self, min_lift: Option<f64>) -> Self {
        self.min_lift = min_lift;
        self
    }

    pub fn with_max_antecedent_size(mut self, max_antecedent_size: Option<usize>) -> Self {
        self.max_antecedent_size = max_antecedent_size;
        self
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        MiningError::check_unit_interval("min_confidence", self.min_confidence)?;
        if let Some(min_lift) = self.min_lift {
            MiningError::check_non_negative("min_lift", min_lift)?;
        }
        if let Some(size) = self.max_antecedent_size {
            MiningError::check_positive("max_antecedent_size", size as u64)?;
        }
        Ok(())
    }

    /// Generate rules, ordered by antecedent size, antecedent ids, then
    /// consequent ids.
    ///
    /// Antecedent and consequent supports are looked up among `itemsets`;
    /// a split whose parts are missing is skipped.
    pub fn generate(&self, itemsets: &[Itemset], targets: &[ItemId]) -> Result<Vec<Rule>, MiningError> {
        self.validate()?;
        let _span = tracing::info_span!(SPAN_GENERATE, itemsets = itemsets.len()).entered();

        let targets: FxHashSet<ItemId> = targets.iter().copied().collect();
        let table: FxHashMap<&[ItemId], &Itemset> =
            itemsets.iter().map(|s| (s.items(), s)).collect();
        let mut rules = Vec::new();
        let mut skipped = 0usize;

        for itemset in itemsets.iter().filter(|s| s.len() >= 2) {
            for (position, &consequent) in itemset.items.iter().enumerate() {
                if !targets.contains(&consequent) {
                    continue;
                }
                let antecedent: ItemList = itemset
                    .items
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != position)
                    .map(|(_, &item)| item)
                    .collect();
                if self
                    .max_antecedent_size
                    .is_some_and(|max| antecedent.len() > max)
                {
                    continue;
                }

                let (Some(base), Some(target)) = (
                    table.get(antecedent.as_slice()),
                    table.get([consequent].as_slice()),
                ) else {
                    tracing::debug!(
                        antecedent = ?antecedent,
                        %consequent,
                        "support of rule part not among itemsets"
                    );
                    skipped += 1;
                    continue;
                };

                let confidence = itemset.count as f64 / base.count as f64;
                if confidence < self.min_confidence {
                    continue;
                }
                let lift = confidence / target.support;
                if self.min_lift.is_some_and(|min| lift < min) {
                    continue;
                }

                rules.push(Rule {
                    antecedent,
                    consequent: std::iter::once(consequent).collect(),
                    support: itemset.support,
                    confidence,
                    lift,
                    support_count: itemset.count,
                });
            }
        }

        rules.sort_by(Rule::emission_cmp);
        tracing::info!(rules = rules.len(), skipped, "generated rules");
        Ok(rules)
    }
}

/// Generate rules with only a confidence threshold.
pub fn generate(
    itemsets: &[Itemset],
    min_confidence: f64,
    targets: &[ItemId],
) -> Result<Vec<Rule>, MiningError> {
    RuleGenerator::new(min_confidence).generate(itemsets, targets)
}
