//! End-to-end discovery: delimited text → prepared table → rules → reports.

use subgroup_core::errors::{DataError, SubgroupErrorCode};
use subgroup_core::types::ItemVocabulary;
use subgroup_core::SubgroupConfig;
use subgroup_mining::encoding::TransactionEncoder;
use subgroup_mining::preparation::{discretize_column, DelimitedReader, QuantileBins};
use subgroup_mining::reporters::create_reporter;
use subgroup_mining::{DiscoveryPipeline, DiscoveryResult};

fn config(min_support: f64, min_confidence: f64, threshold: f64) -> SubgroupConfig {
    let mut config = SubgroupConfig::default();
    config.mining.min_support = Some(min_support);
    config.rules.min_confidence = Some(min_confidence);
    config.reduction.confidence_threshold = Some(threshold);
    config.reduction.min_coverage = Some(1);
    config
}

fn describe_all(result: &DiscoveryResult) -> Vec<String> {
    result
        .reduced_rules
        .iter()
        .map(|r| r.describe(&result.vocabulary))
        .collect()
}

#[test]
fn scenario_from_item_lists() {
    let vocabulary = ItemVocabulary::from_names(["A", "B", "C"], ["T1", "T2"]);
    let rows = vec![
        vec!["A", "B", "T1"],
        vec!["A", "B", "T1"],
        vec!["A", "C", "T2"],
        vec!["A", "T1"],
    ];
    let encoded = TransactionEncoder::encode_item_lists(&rows, vocabulary);
    assert!(encoded.is_clean());

    let pipeline = DiscoveryPipeline::new(config(0.5, 0.6, 0.6));
    let result = pipeline.run(encoded.data).unwrap();
    assert!(result.is_clean());
    let result = result.data;

    let support_of = |names: &[&str]| {
        result
            .itemsets
            .iter()
            .find(|s| result.vocabulary.names_of(&s.items) == names)
            .map(|s| s.support)
    };
    assert_eq!(support_of(&["A"]), Some(1.0));
    assert_eq!(support_of(&["A", "B"]), Some(0.5));
    assert_eq!(support_of(&["A", "T1"]), Some(0.75));
    assert_eq!(support_of(&["C"]), None);

    let generated: Vec<String> = result
        .rules
        .iter()
        .map(|r| format!("{} {}", r.describe(&result.vocabulary), r.confidence))
        .collect();
    assert_eq!(
        generated,
        vec![
            "IF A THEN T1 0.75",
            "IF B THEN T1 1",
            "IF A AND B THEN T1 1",
        ]
    );

    // A,B → T1 is more confident than A → T1, so A → T1 does not remove it;
    // B → T1 does, being as confident and more general.
    assert_eq!(
        describe_all(&result),
        vec!["IF A THEN T1", "IF B THEN T1"]
    );
    assert_eq!(result.diagnostics.transactions, 4);
    assert_eq!(result.diagnostics.generated_rules, 3);
    assert_eq!(result.diagnostics.reduced_rules, 2);
}

#[test]
fn csv_to_reduced_rules() {
    let text = "\
userid_DI,gender,LoE_DI,onlyregistered,Onlyviewed,Onlyexplored
u1,m,Bachelor's,0,1,0
u2,m,Bachelor's,0,1,0
u3,f,Master's,1,0,0
u4,m,Bachelor's,0,1,0
u5,f,Bachelor's,0,0,1
u6,m,Bachelor's,extra
";
    let dataset = DelimitedReader::default().read_str(text).unwrap();
    let mut config = config(0.4, 0.6, 0.8);
    config.preparation.drop_columns = vec!["userid_DI".to_string()];

    let result = DiscoveryPipeline::new(config).run_dataset(&dataset).unwrap();
    assert_eq!(result.warning_count(), 1);
    assert!(matches!(result.warnings[0], DataError::MalformedRow { row: 5, .. }));
    assert_eq!(result.warnings[0].error_code(), "MALFORMED_ROW");

    let data = &result.data;
    assert_eq!(data.diagnostics.transactions, 5);
    assert_eq!(data.diagnostics.skipped_rows, 1);
    assert_eq!(data.diagnostics.frequent_items, 4);
    assert_eq!(data.rules.len(), 3);
    assert_eq!(describe_all(data), vec!["IF gender=m THEN Onlyviewed"]);

    let csv = create_reporter("csv", ";")
        .unwrap()
        .render_rules(&data.reduced_rules, &data.vocabulary)
        .unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("antecedents,consequents,support,confidence,lift")
    );
    assert!(lines
        .next()
        .is_some_and(|l| l.starts_with("gender=m,Onlyviewed,0.6,1,1.66")));
}

#[test]
fn discretized_column_feeds_rules() {
    let text = "\
course_id,gender,grade,onlyregistered,Onlyviewed,Onlyexplored
c1,m,0.1,0,1,0
c1,m,0.9,0,0,1
c1,f,0.2,0,1,0
c1,f,0.8,0,0,1
";
    let mut dataset = DelimitedReader::default().read_str(text).unwrap();
    let bins = QuantileBins::with_labels(vec!["low".to_string(), "high".to_string()]).unwrap();
    discretize_column(&mut dataset, "grade", &bins, None).unwrap();

    let mut config = config(0.5, 0.9, 0.9);
    config.preparation.drop_columns = vec!["course_id".to_string(), "grade".to_string()];
    let result = DiscoveryPipeline::new(config)
        .run_dataset(&dataset)
        .unwrap()
        .data;

    assert_eq!(
        describe_all(&result),
        vec![
            "IF grade_discretized=high THEN Onlyexplored",
            "IF grade_discretized=low THEN Onlyviewed",
        ]
    );
}

#[test]
fn empty_table_is_not_an_error() {
    let dataset = DelimitedReader::default()
        .read_str("gender,Onlyviewed\n")
        .unwrap();
    let mut config = SubgroupConfig::default();
    config.preparation.target_columns = vec!["Onlyviewed".to_string()];

    let result = DiscoveryPipeline::new(config).run_dataset(&dataset).unwrap();
    assert!(result.data.itemsets.is_empty());
    assert!(result.data.rules.is_empty());
    assert!(result.data.reduced_rules.is_empty());
    assert!(result
        .warnings
        .iter()
        .any(|w| matches!(w, DataError::EmptyInput(_))));
}

#[test]
fn renamed_columns_name_items() {
    let text = "sex,Onlyviewed\nm,1\nm,1\n";
    let dataset = DelimitedReader::default().read_str(text).unwrap();
    let mut config = config(0.5, 0.5, 0.5);
    config.preparation.target_columns = vec!["Onlyviewed".to_string()];
    config
        .preparation
        .rename_columns
        .insert("sex".to_string(), "gender".to_string());

    let result = DiscoveryPipeline::new(config)
        .run_dataset(&dataset)
        .unwrap()
        .data;
    assert_eq!(describe_all(&result), vec!["IF gender=m THEN Onlyviewed"]);
}

#[test]
fn configured_preparation_bins_numeric_columns_before_mining() {
    let text = "\
userid_DI,course_id,nevents,viewed,explored,certified
u1,c1,1,1,0,0
u2,c1,2,1,0,0
u3,c1,30,1,1,0
u4,c1,40,1,1,0
u5,c2,3,1,0,0
u6,c2,60,1,1,0
";
    let dataset = DelimitedReader::default().read_str(text).unwrap();
    let mut config = SubgroupConfig::from_toml(
        r#"
[preparation]
drop_columns = ["userid_DI"]

[[preparation.derive_flags]]
name = "Onlyviewed"
when = { viewed = "1", explored = "0", certified = "0" }

[[preparation.derive_flags]]
name = "Onlyexplored"
when = { explored = "1", certified = "0" }

[[preparation.discretize]]
column = "nevents"
method = "quantile"
labels = ["low", "high"]
group_by = "course_id"
"#,
    )
    .unwrap();
    config.preparation.drop_columns.push("course_id".to_string());
    config.preparation.target_columns = vec!["Onlyviewed".to_string(), "Onlyexplored".to_string()];
    config.mining.min_support = Some(0.3);
    config.rules.min_confidence = Some(0.9);
    config.reduction.confidence_threshold = Some(0.9);
    SubgroupConfig::validate(&config).unwrap();

    let result = DiscoveryPipeline::new(config).run_dataset(&dataset).unwrap();
    assert!(result.is_clean());
    let data = &result.data;

    let singles: Vec<&str> = data
        .itemsets
        .iter()
        .filter(|s| s.len() == 1)
        .map(|s| data.vocabulary.name(s.items[0]))
        .collect();
    assert_eq!(
        singles,
        vec!["Onlyexplored", "Onlyviewed", "nevents_discretized=high", "nevents_discretized=low"]
    );
    assert_eq!(
        describe_all(data),
        vec![
            "IF nevents_discretized=high THEN Onlyexplored",
            "IF nevents_discretized=low THEN Onlyviewed",
        ]
    );
}
