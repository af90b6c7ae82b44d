//! JSON reporter: machine-readable output via serde_json.

use serde::Serialize;
use subgroup_core::errors::ReportError;
use subgroup_core::types::{ItemVocabulary, Itemset, Rule};

use super::Reporter;

/// JSON reporter: an array of records with item names resolved.
pub struct JsonReporter;

#[derive(Serialize)]
struct RuleRecord<'a> {
    antecedents: Vec<&'a str>,
    consequents: Vec<&'a str>,
    support: f64,
    confidence: f64,
    lift: f64,
    support_count: u64,
}

#[derive(Serialize)]
struct ItemsetRecord<'a> {
    items: Vec<&'a str>,
    support: f64,
    count: u64,
}

fn to_json<T: Serialize>(records: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(records).map_err(|e| ReportError::Serialization(e.to_string()))
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render_rules(&self, rules: &[Rule], vocabulary: &ItemVocabulary) -> Result<String, ReportError> {
        let records: Vec<RuleRecord<'_>> = rules
            .iter()
            .map(|rule| RuleRecord {
                antecedents: vocabulary.names_of(&rule.antecedent),
                consequents: vocabulary.names_of(&rule.consequent),
                support: rule.support,
                confidence: rule.confidence,
                lift: rule.lift,
                support_count: rule.support_count,
            })
            .collect();
        to_json(&records)
    }

    fn render_itemsets(
        &self,
        itemsets: &[Itemset],
        vocabulary: &ItemVocabulary,
    ) -> Result<String, ReportError> {
        let records: Vec<ItemsetRecord<'_>> = itemsets
            .iter()
            .map(|itemset| ItemsetRecord {
                items: vocabulary.names_of(&itemset.items),
                support: itemset.support,
                count: itemset.count,
            })
            .collect();
        to_json(&records)
    }
}
