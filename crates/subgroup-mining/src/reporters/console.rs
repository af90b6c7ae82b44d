//! Console reporter: human-readable rule listing.

use subgroup_core::errors::ReportError;
use subgroup_core::types::{ItemVocabulary, Itemset, Rule};

use super::Reporter;

/// One `IF … THEN …` line per rule.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn render_rules(&self, rules: &[Rule], vocabulary: &ItemVocabulary) -> Result<String, ReportError> {
        let mut output = format!("{} rules\n", rules.len());
        for rule in rules {
            output.push_str(&format!(
                "{} (support={:.3}, confidence={:.3}, lift={:.3})\n",
                rule.describe(vocabulary),
                rule.support,
                rule.confidence,
                rule.lift,
            ));
        }
        Ok(output)
    }

    fn render_itemsets(
        &self,
        itemsets: &[Itemset],
        vocabulary: &ItemVocabulary,
    ) -> Result<String, ReportError> {
        let mut output = format!("{} frequent itemsets\n", itemsets.len());
        for itemset in itemsets {
            output.push_str(&format!(
                "{{{}}} (support={:.3})\n",
                vocabulary.names_of(&itemset.items).join(", "),
                itemset.support,
            ));
        }
        Ok(output)
    }
}
