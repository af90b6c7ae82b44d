//! Two-stage rule reduction: threshold filter, then redundancy removal.

use rayon::prelude::*;
use subgroup_core::config::ReductionConfig;
use subgroup_core::errors::MiningError;
use subgroup_core::tracing::spans::SPAN_REDUCE;
use subgroup_core::types::Rule;

/// Keeps confident, well-covered rules that no more general rule makes
/// redundant.
#[derive(Debug, Clone)]
pub struct RuleReducer {
    confidence_threshold: f64,
    min_coverage: u64,
    parallel: bool,
}

impl RuleReducer {
    pub fn new(confidence_threshold: f64, min_coverage: u64) -> Self {
        Self {
            confidence_threshold,
            min_coverage,
            parallel: false,
        }
    }

    pub fn from_config(config: &ReductionConfig) -> Self {
        Self {
            confidence_threshold: config.effective_confidence_threshold(),
            min_coverage: config.effective_min_coverage(),
            parallel: config.effective_parallel(),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        MiningError::check_unit_interval("confidence_threshold", self.confidence_threshold)?;
        MiningError::check_positive("min_coverage", self.min_coverage)
    }

    /// Reduce `rules`, preserving the relative order of survivors.
    ///
    /// Redundancy is judged against the whole stage-one set, so a rule
    /// dropped as redundant can still make other rules redundant.
    pub fn reduce(&self, rules: &[Rule]) -> Result<Vec<Rule>, MiningError> {
        self.validate()?;
        let _span = tracing::info_span!(SPAN_REDUCE, rules = rules.len()).entered();

        let filtered: Vec<&Rule> = rules
            .iter()
            .filter(|r| {
                r.confidence >= self.confidence_threshold && r.support_count >= self.min_coverage
            })
            .collect();

        let is_redundant = |rule: &&Rule| filtered.iter().any(|other| other.subsumes(rule));
        let keep: Vec<bool> = if self.parallel {
            filtered.par_iter().map(|r| !is_redundant(r)).collect()
        } else {
            filtered.iter().map(|r| !is_redundant(r)).collect()
        };

        let reduced: Vec<Rule> = filtered
            .iter()
            .zip(keep)
            .filter_map(|(rule, keep)| keep.then(|| (*rule).clone()))
            .collect();

        tracing::info!(
            input = rules.len(),
            above_threshold = filtered.len(),
            kept = reduced.len(),
            "reduced rules"
        );
        Ok(reduced)
    }
}

/// Reduce `rules` sequentially.
pub fn reduce(
    rules: &[Rule],
    confidence_threshold: f64,
    min_coverage: u64,
) -> Result<Vec<Rule>, MiningError> {
    RuleReducer::new(confidence_threshold, min_coverage).reduce(rules)
}
