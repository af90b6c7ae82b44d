//! Config-driven table shaping ahead of encoding.
//!
//! Steps run in a fixed order: derive flag columns, discretize numeric
//! columns, drop columns (configured drops plus consumed sources), rename.
//! Dropping after the derived columns exist lets flags and group-wise bins
//! read columns that do not reach the encoder. A step that names an absent
//! column is skipped with a `MissingColumn` warning; a malformed discretize
//! entry is fatal.

use subgroup_core::config::{DerivedFlagConfig, PreparationConfig};
use subgroup_core::errors::{ConfigError, DataError, PipelineResult};

use super::dataset::TabularDataset;
use super::discretize::{build_discretizer, discretize_column};

/// Apply every preparation step of `config` to a copy of `dataset`.
pub fn prepare_dataset(
    dataset: &TabularDataset,
    config: &PreparationConfig,
) -> Result<PipelineResult<TabularDataset>, ConfigError> {
    let mut prepared = dataset.clone();
    let mut warnings = Vec::new();
    let mut consumed = config.drop_columns.clone();

    for flag in &config.derive_flags {
        match derive_flag(&mut prepared, flag) {
            Ok(()) if !flag.effective_keep_sources() => {
                consumed.extend(flag.when.keys().cloned());
            }
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(flag = %flag.name, %error, "skipping derived flag");
                warnings.push(error);
            }
        }
    }

    for entry in &config.discretize {
        let discretizer = build_discretizer(entry)?;
        match discretize_column(
            &mut prepared,
            &entry.column,
            discretizer.as_ref(),
            entry.group_by.as_deref(),
        ) {
            Ok(()) if !entry.effective_keep_source() => consumed.push(entry.column.clone()),
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(column = %entry.column, %error, "skipping discretization");
                warnings.push(error);
            }
        }
    }

    let dropped = prepared.drop_columns(&consumed);
    prepared.rename_columns(&config.rename_columns);
    tracing::debug!(
        dropped,
        flags = config.derive_flags.len(),
        discretized = config.discretize.len(),
        columns = prepared.columns().len(),
        "prepared dataset"
    );

    Ok(PipelineResult {
        data: prepared,
        warnings,
    })
}

/// Append the 0/1 column `flag.name`. A missing cell never matches.
pub fn derive_flag(
    dataset: &mut TabularDataset,
    flag: &DerivedFlagConfig,
) -> Result<(), DataError> {
    let mut conditions = Vec::with_capacity(flag.when.len());
    for (column, expected) in &flag.when {
        let idx = dataset
            .column_index(column)
            .ok_or_else(|| DataError::MissingColumn(column.clone()))?;
        conditions.push((idx, expected.as_str()));
    }

    dataset.derive_column(flag.name.clone(), |_, row| {
        let hit = conditions.iter().all(|&(idx, expected)| {
            row.get(idx)
                .and_then(|cell| cell.as_deref())
                .is_some_and(|cell| same_value(cell, expected))
        });
        Some(if hit { "1" } else { "0" }.to_string())
    });
    Ok(())
}

fn same_value(cell: &str, expected: &str) -> bool {
    let (cell, expected) = (cell.trim(), expected.trim());
    if cell == expected {
        return true;
    }
    match (cell.parse::<f64>(), expected.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use subgroup_core::config::{DiscretizeConfig, DiscretizeMethod};

    use super::*;

    fn flag(name: &str, when: &[(&str, &str)]) -> DerivedFlagConfig {
        DerivedFlagConfig {
            name: name.to_string(),
            when: when
                .iter()
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            keep_sources: None,
        }
    }

    fn engagement() -> TabularDataset {
        TabularDataset::from_strs(
            &["userid_DI", "course_id", "YoB", "nevents", "viewed", "explored", "certified"],
            &[
                &["u1", "c1", "1990", "5", "1", "0", "0"],
                &["u2", "c1", "1970", "50", "1.0", "1", "0"],
                &["u3", "c2", "NA", "500", "0", "0", "0"],
                &["u4", "c2", "2001", "5000", "NA", "0", "0"],
            ],
        )
    }

    #[test]
    fn flags_compare_numbers_and_treat_missing_as_no_match() {
        let mut ds = engagement();
        let viewed = flag(
            "Onlyviewed",
            &[("viewed", "1"), ("explored", "0"), ("certified", "0")],
        );
        derive_flag(&mut ds, &viewed).unwrap();
        let flags: Vec<_> = (0..4).map(|r| ds.cell(r, "Onlyviewed")).collect();
        assert_eq!(flags, vec![Some("1"), Some("0"), Some("0"), Some("0")]);

        derive_flag(&mut ds, &flag("Onlyexplored", &[("explored", "1.0")])).unwrap();
        assert_eq!(ds.cell(1, "Onlyexplored"), Some("1"));
    }

    #[test]
    fn flag_on_absent_column_is_missing_column() {
        let mut ds = engagement();
        let result = derive_flag(&mut ds, &flag("T", &[("grade", "1")]));
        assert!(matches!(result, Err(DataError::MissingColumn(c)) if c == "grade"));
        assert!(ds.column_index("T").is_none());
    }

    #[test]
    fn steps_run_in_order_and_replace_sources() {
        let config = PreparationConfig {
            drop_columns: vec!["userid_DI".to_string()],
            rename_columns: BTreeMap::from([("YoB_discretized".to_string(), "age".to_string())]),
            derive_flags: vec![
                flag("onlyregistered", &[("viewed", "0"), ("explored", "0"), ("certified", "0")]),
                flag("Onlyviewed", &[("viewed", "1"), ("explored", "0"), ("certified", "0")]),
            ],
            discretize: vec![
                DiscretizeConfig {
                    column: "YoB".to_string(),
                    method: DiscretizeMethod::Manual,
                    bins: None,
                    edges: vec![0.0, 1980.0, f64::INFINITY],
                    labels: vec!["older".to_string(), "younger".to_string()],
                    group_by: None,
                    keep_source: None,
                },
                DiscretizeConfig {
                    column: "nevents".to_string(),
                    method: DiscretizeMethod::Quantile,
                    bins: Some(2),
                    edges: Vec::new(),
                    labels: Vec::new(),
                    group_by: Some("course_id".to_string()),
                    keep_source: Some(true),
                },
            ],
            ..PreparationConfig::default()
        };

        let prepared = prepare_dataset(&engagement(), &config).unwrap();
        assert!(prepared.is_clean());
        let ds = prepared.data;
        assert_eq!(
            ds.columns(),
            &[
                "course_id",
                "nevents",
                "onlyregistered",
                "Onlyviewed",
                "age",
                "nevents_discretized",
            ]
        );
        assert_eq!(ds.cell(0, "age"), Some("younger"));
        assert_eq!(ds.cell(1, "age"), Some("older"));
        assert_eq!(ds.cell(2, "age"), None);
        assert_eq!(ds.cell(2, "onlyregistered"), Some("1"));
        assert_eq!(ds.cell(0, "nevents_discretized"), Some("low"));
        assert_eq!(ds.cell(1, "nevents_discretized"), Some("high"));
        assert_eq!(ds.cell(2, "nevents_discretized"), Some("low"));
        assert_eq!(ds.cell(3, "nevents_discretized"), Some("high"));
    }

    #[test]
    fn absent_columns_warn_and_invalid_entries_fail() {
        let config = PreparationConfig {
            discretize: vec![DiscretizeConfig {
                column: "grade".to_string(),
                method: DiscretizeMethod::EqualWidth,
                bins: Some(2),
                edges: Vec::new(),
                labels: Vec::new(),
                group_by: None,
                keep_source: None,
            }],
            ..PreparationConfig::default()
        };
        let prepared = prepare_dataset(&engagement(), &config).unwrap();
        assert!(matches!(
            &prepared.warnings[..],
            [DataError::MissingColumn(c)] if c == "grade"
        ));
        assert_eq!(prepared.data.columns(), engagement().columns());

        let mut invalid = config;
        invalid.discretize[0].bins = Some(0);
        assert!(prepare_dataset(&engagement(), &invalid).is_err());
    }
}
