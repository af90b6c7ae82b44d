//! Delimited-text import.
//!
//! Header row, configurable delimiter, double-quoted fields with `""`
//! escapes (quoted fields may span lines), configurable missing-value tokens.

use std::path::Path;

use subgroup_core::config::PreparationConfig;
use subgroup_core::errors::DataError;

use super::dataset::TabularDataset;

/// Reader for delimited text files.
#[derive(Debug, Clone)]
pub struct DelimitedReader {
    delimiter: char,
    na_values: Vec<String>,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::from_config(&PreparationConfig::default())
    }
}

impl DelimitedReader {
    pub fn new(delimiter: char, na_values: Vec<String>) -> Self {
        Self {
            delimiter,
            na_values,
        }
    }

    pub fn from_config(config: &PreparationConfig) -> Self {
        Self::new(config.effective_delimiter(), config.effective_na_values())
    }

    /// Read a file from disk.
    pub fn read_path(&self, path: &Path) -> Result<TabularDataset, DataError> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.read_str(&text)
    }

    /// Parse delimited text. The first record is the header; a leading
    /// byte-order mark is ignored.
    pub fn read_str(&self, text: &str) -> Result<TabularDataset, DataError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut records = parse_records(text, self.delimiter).into_iter();
        let header = records
            .next()
            .ok_or_else(|| DataError::EmptyInput("no header row".to_string()))?;
        let columns: Vec<String> = header
            .into_iter()
            .map(|field| field.value.trim().to_string())
            .collect();

        let rows = records
            .map(|record| {
                record
                    .into_iter()
                    .map(|field| {
                        if self.na_values.iter().any(|na| *na == field.value) {
                            None
                        } else {
                            Some(field.value)
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(TabularDataset::new(columns, rows))
    }
}

#[derive(Debug)]
struct Field {
    value: String,
}

/// Split text into records of fields. Blank lines are skipped.
fn parse_records(text: &str, delimiter: char) -> Vec<Vec<Field>> {
    let mut records = Vec::new();
    let mut record: Vec<Field> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            '"' if current.is_empty() => {
                in_quotes = true;
                field_started = true;
            }
            '\r' => {}
            '\n' => {
                if field_started || !record.is_empty() || !current.is_empty() {
                    record.push(Field {
                        value: std::mem::take(&mut current),
                    });
                    records.push(std::mem::take(&mut record));
                }
                field_started = false;
            }
            c if c == delimiter => {
                record.push(Field {
                    value: std::mem::take(&mut current),
                });
                field_started = true;
            }
            c => {
                current.push(c);
                field_started = true;
            }
        }
    }

    if field_started || !record.is_empty() || !current.is_empty() {
        record.push(Field { value: current });
        records.push(record);
    }
    records
}

/// Quote a field if it contains the delimiter, a quote, or a line break.
pub fn quote_field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
