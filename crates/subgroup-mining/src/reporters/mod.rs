//! Reporters: output formats for mined rules and itemsets.
//!
//! Formats: delimited text (csv / tsv), JSON, console.

pub mod console;
pub mod delimited;
pub mod json;

use subgroup_core::config::OutputConfig;
use subgroup_core::errors::ReportError;
use subgroup_core::types::{ItemVocabulary, Itemset, Rule};

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn render_rules(&self, rules: &[Rule], vocabulary: &ItemVocabulary) -> Result<String, ReportError>;
    fn render_itemsets(
        &self,
        itemsets: &[Itemset],
        vocabulary: &ItemVocabulary,
    ) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, item_separator: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "csv" => Some(Box::new(delimited::DelimitedReporter::csv(item_separator))),
        "tsv" => Some(Box::new(delimited::DelimitedReporter::tsv(item_separator))),
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter)),
        _ => None,
    }
}

/// Create the reporter selected by the output configuration.
pub fn reporter_from_config(config: &OutputConfig) -> Result<Box<dyn Reporter>, ReportError> {
    let format = config.effective_format();
    create_reporter(format, config.effective_item_separator())
        .ok_or_else(|| ReportError::UnknownFormat(format.to_string()))
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["csv", "tsv", "json", "console"]
}
