//! Compiled defaults.

pub const DEFAULT_MIN_SUPPORT: f64 = 0.05;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MIN_COVERAGE: u64 = 1;
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_ITEM_SEPARATOR: &str = ";";
pub const DEFAULT_OUTPUT_FORMAT: &str = "csv";
pub const DEFAULT_TARGET_COLUMNS: [&str; 3] = ["onlyregistered", "Onlyviewed", "Onlyexplored"];
pub const DEFAULT_NA_VALUES: [&str; 4] = ["", "NA", "NaN", "nan"];
