//! Error code and pipeline result tests.

use subgroup_core::errors::{
    ConfigError, DataError, MiningError, PipelineError, PipelineResult, SubgroupErrorCode,
};

#[test]
fn parameter_checks() {
    assert!(MiningError::check_support("min_support", 0.05).is_ok());
    assert!(MiningError::check_support("min_support", 1.0).is_ok());
    assert!(MiningError::check_support("min_support", 0.0).is_err());
    assert!(MiningError::check_support("min_support", 1.01).is_err());
    assert!(MiningError::check_support("min_support", f64::NAN).is_err());
    assert!(MiningError::check_unit_interval("min_confidence", 0.0).is_ok());
    assert!(MiningError::check_unit_interval("min_confidence", -0.1).is_err());
    assert!(MiningError::check_positive("min_coverage", 0).is_err());
    assert!(MiningError::check_non_negative("min_lift", f64::INFINITY).is_err());
}

#[test]
fn codes_propagate_through_pipeline_error() {
    let err: PipelineError = MiningError::check_support("min_support", 2.0)
        .unwrap_err()
        .into();
    assert_eq!(err.error_code(), "INVALID_PARAMETER");
    assert!(err.coded_string().starts_with("[INVALID_PARAMETER]"));

    let err: PipelineError = DataError::MalformedRow {
        row: 3,
        reason: "expected 4 fields, found 2".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "MALFORMED_ROW");

    let err: PipelineError = ConfigError::FileNotFound {
        path: "x".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn pipeline_result_collects_warnings() {
    let mut result = PipelineResult::new(vec![1, 2, 3]);
    assert!(result.is_clean());
    result.add_warning(DataError::EmptyInput("no rows".to_string()));
    assert_eq!(result.warning_count(), 1);
    assert_eq!(result.data, vec![1, 2, 3]);
    assert!(!result.is_clean());
}
