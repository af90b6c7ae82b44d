//! Drives the CLI commands against files in a temporary project directory.

use std::fs;

use subgroup_cli::{parse_args, run_command};

const RECORDS: &str = "\
userid_DI,gender,LoE_DI,onlyregistered,Onlyviewed,Onlyexplored
u1,m,Bachelor's,0,1,0
u2,m,Bachelor's,0,1,0
u3,f,Master's,1,0,0
u4,m,Bachelor's,0,1,0
u5,f,Bachelor's,0,0,1
";

fn run(args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["subgroup"];
    argv.extend_from_slice(args);
    run_command(parse_args(argv)?)
}

#[test]
fn discover_writes_rules_and_itemsets() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("records.csv");
    let rules = dir.path().join("rules.csv");
    let itemsets = dir.path().join("itemsets.csv");
    fs::write(&input, RECORDS).unwrap();
    fs::write(
        dir.path().join("subgroup.toml"),
        "[preparation]\ndrop_columns = [\"userid_DI\"]\n\n[mining]\nmin_support = 0.4\n",
    )
    .unwrap();

    run(&[
        "-q",
        "discover",
        input.to_str().unwrap(),
        "--config",
        dir.path().to_str().unwrap(),
        "--confidence-threshold",
        "0.8",
        "--output",
        rules.to_str().unwrap(),
        "--itemsets",
        itemsets.to_str().unwrap(),
    ])
    .unwrap();

    let rules = fs::read_to_string(rules).unwrap();
    let lines: Vec<&str> = rules.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "antecedents,consequents,support,confidence,lift");
    assert!(lines[1].starts_with("gender=m,Onlyviewed,0.6,1,"));

    let itemsets = fs::read_to_string(itemsets).unwrap();
    assert!(itemsets.starts_with("itemsets,support\n"));
    assert!(itemsets.contains("LoE_DI=Bachelor's,0.8\n"));
}

#[test]
fn discover_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let err = run(&[
        "discover",
        missing.to_str().unwrap(),
        "--config",
        dir.path().to_str().unwrap(),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn invalid_threshold_fails_before_reading_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&[
        "discover",
        "does-not-matter.csv",
        "--config",
        dir.path().to_str().unwrap(),
        "--min-support",
        "1.5",
    ])
    .unwrap_err();
    assert!(err.to_string().contains("min_support"));
}

#[test]
fn show_config_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("subgroup.toml"), "[rules]\nmin_confidence = 0.7\n").unwrap();
    run(&["show-config", "--config", dir.path().to_str().unwrap()]).unwrap();
}

const RAW_ENGAGEMENT: &str = "\
userid_DI,course_id,nevents,viewed,explored,certified
u1,c1,1,1,0,0
u2,c1,2,1,0,0
u3,c1,30,1,1,0
u4,c1,40,1,1,0
u5,c2,3,1,0,0
u6,c2,60,1,1,0
";

const PREPARATION: &str = r#"
[preparation]
target_columns = ["Onlyviewed", "Onlyexplored"]
drop_columns = ["userid_DI", "course_id"]

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

[mining]
min_support = 0.3

[rules]
min_confidence = 0.9
"#;

#[test]
fn prepare_writes_binned_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("prepared.csv");
    fs::write(&input, RAW_ENGAGEMENT).unwrap();
    fs::write(dir.path().join("subgroup.toml"), PREPARATION).unwrap();

    run(&[
        "-q",
        "prepare",
        input.to_str().unwrap(),
        "--config",
        dir.path().to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let prepared = fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = prepared.lines().collect();
    assert_eq!(lines[0], "Onlyviewed,Onlyexplored,nevents_discretized");
    assert_eq!(lines[1], "1,0,low");
    assert_eq!(lines[3], "0,1,high");
    assert_eq!(lines[5], "1,0,low");
    assert_eq!(lines.len(), 7);
}

#[test]
fn discover_mines_configured_bins_not_raw_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let rules = dir.path().join("rules.csv");
    let itemsets = dir.path().join("itemsets.csv");
    fs::write(&input, RAW_ENGAGEMENT).unwrap();
    fs::write(dir.path().join("subgroup.toml"), PREPARATION).unwrap();

    run(&[
        "-q",
        "discover",
        input.to_str().unwrap(),
        "--config",
        dir.path().to_str().unwrap(),
        "--output",
        rules.to_str().unwrap(),
        "--itemsets",
        itemsets.to_str().unwrap(),
    ])
    .unwrap();

    let rules = fs::read_to_string(rules).unwrap();
    let lines: Vec<&str> = rules.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("nevents_discretized=high,Onlyexplored,0.5,1,2"));
    assert!(lines[2].starts_with("nevents_discretized=low,Onlyviewed,0.5,1,2"));

    let itemsets = fs::read_to_string(itemsets).unwrap();
    assert!(!itemsets.contains("nevents="));
    assert!(!itemsets.contains("viewed="));
}
