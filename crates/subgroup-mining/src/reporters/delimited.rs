//! Delimited reporter: one row per rule or itemset.

use subgroup_core::errors::ReportError;
use subgroup_core::types::{ItemId, ItemVocabulary, Itemset, Rule};

use super::Reporter;
use crate::preparation::delimited::quote_field;

/// Writes `antecedents,consequents,support,confidence,lift` rows. Items of
/// one cell are joined with the item separator.
#[derive(Debug, Clone)]
pub struct DelimitedReporter {
    delimiter: char,
    item_separator: String,
}

impl DelimitedReporter {
    pub fn new(delimiter: char, item_separator: impl Into<String>) -> Self {
        Self {
            delimiter,
            item_separator: item_separator.into(),
        }
    }

    pub fn csv(item_separator: &str) -> Self {
        Self::new(',', item_separator)
    }

    pub fn tsv(item_separator: &str) -> Self {
        Self::new('\t', item_separator)
    }

    fn items(&self, items: &[ItemId], vocabulary: &ItemVocabulary) -> String {
        quote_field(
            &vocabulary.names_of(items).join(self.item_separator.as_str()),
            self.delimiter,
        )
    }

    fn row(&self, fields: &[String]) -> String {
        let delimiter = self.delimiter.to_string();
        let mut line = fields.join(delimiter.as_str());
        line.push('\n');
        line
    }
}

impl Reporter for DelimitedReporter {
    fn name(&self) -> &'static str {
        if self.delimiter == '\t' {
            "tsv"
        } else {
            "csv"
        }
    }

    fn render_rules(&self, rules: &[Rule], vocabulary: &ItemVocabulary) -> Result<String, ReportError> {
        let mut out = self.row(&[
            "antecedents".to_string(),
            "consequents".to_string(),
            "support".to_string(),
            "confidence".to_string(),
            "lift".to_string(),
        ]);
        for rule in rules {
            out.push_str(&self.row(&[
                self.items(&rule.antecedent, vocabulary),
                self.items(&rule.consequent, vocabulary),
                rule.support.to_string(),
                rule.confidence.to_string(),
                rule.lift.to_string(),
            ]));
        }
        Ok(out)
    }

    fn render_itemsets(
        &self,
        itemsets: &[Itemset],
        vocabulary: &ItemVocabulary,
    ) -> Result<String, ReportError> {
        let mut out = self.row(&["itemsets".to_string(), "support".to_string()]);
        for itemset in itemsets {
            out.push_str(&self.row(&[
                self.items(&itemset.items, vocabulary),
                itemset.support.to_string(),
            ]));
        }
        Ok(out)
    }
}
