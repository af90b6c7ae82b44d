//! In-memory tabular dataset with missing values.

use std::collections::BTreeMap;

use subgroup_core::errors::DataError;

use super::delimited::quote_field;

/// A table of optional string cells with named columns.
///
/// Rows may be ragged (a different cell count than the header); such rows
/// are kept as loaded and reported as malformed by the encoder. Dropping
/// columns never makes a ragged row look well-formed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    /// Row index → (expected, found) cell counts, recorded when a column
    /// drop would otherwise hide the mismatch.
    ragged: BTreeMap<usize, (usize, usize)>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            columns,
            rows,
            ragged: BTreeMap::new(),
        }
    }

    /// Build a dataset from string literals; `""` and `"NA"` become missing.
    pub fn from_strs(columns: &[&str], rows: &[&[&str]]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match *cell {
                        "" | "NA" => None,
                        value => Some(value.to_string()),
                    })
                    .collect()
            })
            .collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// `(expected, found)` cell counts if the row was loaded with a
    /// different width than the header.
    pub fn width_mismatch(&self, row: usize) -> Option<(usize, usize)> {
        if let Some(&mismatch) = self.ragged.get(&row) {
            return Some(mismatch);
        }
        let found = self.rows.get(row)?.len();
        (found != self.columns.len()).then_some((self.columns.len(), found))
    }

    /// Drop the named columns. Names that do not exist are ignored.
    /// Returns the number of columns removed.
    pub fn drop_columns(&mut self, names: &[String]) -> usize {
        let mut indices: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        indices.sort_unstable();
        indices.dedup();
        if indices.is_empty() {
            return 0;
        }

        let width = self.columns.len();
        for (row_idx, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                self.ragged.entry(row_idx).or_insert((width, row.len()));
            }
        }

        for &idx in indices.iter().rev() {
            self.columns.remove(idx);
            for row in &mut self.rows {
                if idx < row.len() {
                    row.remove(idx);
                }
            }
        }
        indices.len()
    }

    /// Rename columns (old name → new name). Unknown names are ignored.
    pub fn rename_columns(&mut self, renames: &BTreeMap<String, String>) {
        for column in &mut self.columns {
            if let Some(new_name) = renames.get(column.as_str()) {
                *column = new_name.clone();
            }
        }
    }

    /// Append a column whose value is computed from each row.
    pub fn derive_column<F>(&mut self, name: impl Into<String>, derive: F)
    where
        F: Fn(&Self, &[Option<String>]) -> Option<String>,
    {
        let values: Vec<Option<String>> = self.rows.iter().map(|row| derive(self, row)).collect();
        self.push_column(name, values);
    }

    /// Append a column of precomputed values, one per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Option<String>>) {
        self.columns.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Cell lookup within a row slice by column name.
    pub fn value<'a>(&self, row: &'a [Option<String>], column: &str) -> Option<&'a str> {
        let idx = self.column_index(column)?;
        row.get(idx)?.as_deref()
    }

    /// Parse a column as numbers. Missing and non-numeric cells are `None`.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<Option<f64>>, DataError> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| DataError::MissingColumn(column.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| {
                row.get(idx)
                    .and_then(|cell| cell.as_deref())
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
                    .filter(|v| v.is_finite())
            })
            .collect())
    }

    /// Render as delimited text with a header row; missing cells are empty.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let separator = delimiter.to_string();
        let mut out = String::new();
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| quote_field(c, delimiter))
            .collect();
        out.push_str(&header.join(separator.as_str()));
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| quote_field(cell.as_deref().unwrap_or(""), delimiter))
                .collect();
            out.push_str(&cells.join(separator.as_str()));
            out.push('\n');
        }
        out
    }
}
