//! Row → transaction encoding.
//!
//! Every non-missing attribute cell becomes the item `"{column}={value}"`;
//! every target column whose flag is true becomes the item named after the
//! column. The vocabulary is built fresh per call and frozen before ids are
//! handed out, so id order is lexicographic name order.

use subgroup_core::config::PreparationConfig;
use subgroup_core::errors::{DataError, PipelineResult};
use subgroup_core::tracing::spans::SPAN_ENCODE;
use subgroup_core::types::{ItemId, ItemVocabulary, Transaction};

use crate::preparation::TabularDataset;

/// Encoded transactions together with the vocabulary their ids refer to.
#[derive(Debug, Default)]
pub struct EncodedTransactions {
    pub vocabulary: ItemVocabulary,
    pub transactions: Vec<Transaction>,
}

impl EncodedTransactions {
    pub fn new(vocabulary: ItemVocabulary, transactions: Vec<Transaction>) -> Self {
        Self {
            vocabulary,
            transactions,
        }
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Target-class ids of the vocabulary.
    pub fn target_ids(&self) -> Vec<ItemId> {
        self.vocabulary.target_ids()
    }
}

/// Stateless encoder; holds only the names of the target columns.
#[derive(Debug, Clone)]
pub struct TransactionEncoder {
    target_columns: Vec<String>,
}

impl TransactionEncoder {
    pub fn new<I, S>(target_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_columns: target_columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &PreparationConfig) -> Self {
        Self::new(config.effective_target_columns())
    }

    pub fn target_columns(&self) -> &[String] {
        &self.target_columns
    }

    /// Encode one transaction per row.
    ///
    /// Rows with the wrong number of cells, or with a target cell that is not
    /// a boolean, are skipped and reported as `MalformedRow` warnings. Target
    /// columns absent from the header are reported as `MissingColumn`
    /// warnings and otherwise ignored.
    pub fn encode(&self, dataset: &TabularDataset) -> PipelineResult<EncodedTransactions> {
        let _span = tracing::info_span!(SPAN_ENCODE, rows = dataset.len()).entered();
        let mut result = PipelineResult::<EncodedTransactions>::default();
        let columns = dataset.columns();

        let mut is_target = vec![false; columns.len()];
        for name in &self.target_columns {
            match dataset.column_index(name) {
                Some(idx) => is_target[idx] = true,
                None => {
                    tracing::warn!(column = %name, "target column not present in dataset");
                    result.add_warning(DataError::MissingColumn(name.clone()));
                }
            }
        }

        let mut builder = ItemVocabulary::builder();
        for (column, _) in columns.iter().zip(&is_target).filter(|(_, t)| **t) {
            builder.add_target(column.clone());
        }

        let mut encoded_rows: Vec<Vec<String>> = Vec::with_capacity(dataset.len());
        for (row_idx, row) in dataset.rows().iter().enumerate() {
            let items = match dataset.width_mismatch(row_idx) {
                Some((expected, found)) => {
                    Err(format!("expected {expected} fields, found {found}"))
                }
                None => row_items(columns, &is_target, row),
            };
            match items {
                Ok(items) => {
                    for item in &items {
                        builder.add_attribute(item.clone());
                    }
                    encoded_rows.push(items);
                }
                Err(reason) => {
                    tracing::warn!(row = row_idx, %reason, "skipping malformed row");
                    result.add_warning(DataError::MalformedRow {
                        row: row_idx,
                        reason,
                    });
                }
            }
        }

        let vocabulary = builder.build();
        let transactions: Vec<Transaction> = encoded_rows
            .iter()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|name| vocabulary.id_of(name))
                    .collect()
            })
            .collect();

        tracing::info!(
            transactions = transactions.len(),
            items = vocabulary.len(),
            skipped_rows = dataset.len() - transactions.len(),
            "encoded dataset"
        );
        result.data = EncodedTransactions::new(vocabulary, transactions);
        result
    }

    /// Encode pre-itemized rows against a fixed vocabulary.
    ///
    /// A row naming an item outside the vocabulary is skipped with a
    /// `MalformedRow` warning.
    pub fn encode_item_lists<R, S>(
        rows: &[R],
        vocabulary: ItemVocabulary,
    ) -> PipelineResult<EncodedTransactions>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let _span = tracing::info_span!(SPAN_ENCODE, rows = rows.len()).entered();
        let mut result = PipelineResult::<EncodedTransactions>::default();
        let mut transactions = Vec::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            let ids: Result<Vec<ItemId>, &str> = row
                .as_ref()
                .iter()
                .map(|name| {
                    let name = name.as_ref();
                    vocabulary.id_of(name).ok_or(name)
                })
                .collect();
            match ids {
                Ok(ids) => transactions.push(Transaction::new(ids)),
                Err(item) => {
                    tracing::warn!(row = row_idx, item, "skipping row with unknown item");
                    result.add_warning(DataError::MalformedRow {
                        row: row_idx,
                        reason: format!("unknown item '{item}'"),
                    });
                }
            }
        }

        result.data = EncodedTransactions::new(vocabulary, transactions);
        result
    }
}

/// Item names for a full-width row, or the reason the row is malformed.
fn row_items(
    columns: &[String],
    is_target: &[bool],
    row: &[Option<String>],
) -> Result<Vec<String>, String> {
    let mut items = Vec::with_capacity(row.len());
    for ((column, cell), &target) in columns.iter().zip(row).zip(is_target) {
        let Some(value) = cell.as_deref() else {
            continue;
        };
        if target {
            match parse_flag(value) {
                Some(true) => items.push(column.clone()),
                Some(false) => {}
                None => {
                    return Err(format!(
                        "target column '{column}' has non-boolean value '{value}'"
                    ))
                }
            }
        } else {
            items.push(format!("{column}={value}"));
        }
    }
    Ok(items)
}

/// Parse a target flag: `1/0`, `1.0/0.0`, `true/false`, `yes/no` (any case).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" => Some(true),
        "0" | "0.0" | "false" | "no" => Some(false),
        _ => None,
    }
}
