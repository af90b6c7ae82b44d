//! Top-level 4-stage discovery pipeline orchestrator.
//!
//! Encode → mine → generate → reduce. Every parameter is validated before
//! the first stage runs; after that nothing is fatal and data problems are
//! collected as warnings.

use std::fmt;

use subgroup_core::errors::{DataError, MiningError, PipelineError, PipelineResult};
use subgroup_core::types::{ItemVocabulary, Itemset, Rule};
use subgroup_core::SubgroupConfig;

use crate::encoding::{EncodedTransactions, TransactionEncoder};
use crate::fpgrowth::FpGrowth;
use crate::preparation::{prepare_dataset, TabularDataset};
use crate::reduction::RuleReducer;
use crate::rules::RuleGenerator;

/// The 4-stage discovery pipeline.
pub struct DiscoveryPipeline {
    config: SubgroupConfig,
    encoder: TransactionEncoder,
    miner: FpGrowth,
    generator: RuleGenerator,
    reducer: RuleReducer,
}

/// Everything one run produces.
#[derive(Debug, Default)]
pub struct DiscoveryResult {
    /// Vocabulary the ids of every itemset and rule refer to.
    pub vocabulary: ItemVocabulary,
    pub itemsets: Vec<Itemset>,
    /// Rules as generated, before reduction.
    pub rules: Vec<Rule>,
    pub reduced_rules: Vec<Rule>,
    pub diagnostics: DiscoveryDiagnostics,
}

/// Per-stage counts of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryDiagnostics {
    pub transactions: usize,
    pub skipped_rows: usize,
    pub frequent_items: usize,
    pub itemsets: usize,
    pub generated_rules: usize,
    pub reduced_rules: usize,
}

impl fmt::Display for DiscoveryDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} transactions ({} rows skipped), {} frequent items, {} itemsets, {} rules, {} after reduction",
            self.transactions,
            self.skipped_rows,
            self.frequent_items,
            self.itemsets,
            self.generated_rules,
            self.reduced_rules,
        )
    }
}

impl DiscoveryPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: SubgroupConfig) -> Self {
        Self {
            encoder: TransactionEncoder::from_config(&config.preparation),
            miner: FpGrowth::from_config(&config.mining),
            generator: RuleGenerator::from_config(&config.rules),
            reducer: RuleReducer::from_config(&config.reduction),
            config,
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SubgroupConfig::default())
    }

    pub fn config(&self) -> &SubgroupConfig {
        &self.config
    }

    /// Validate the parameters of every stage.
    pub fn validate(&self) -> Result<(), MiningError> {
        self.miner.validate()?;
        self.generator.validate()?;
        self.reducer.validate()
    }

    /// Apply the configured drops, derived flags, discretizations and
    /// renames to a copy of `dataset`.
    pub fn prepare(
        &self,
        dataset: &TabularDataset,
    ) -> Result<PipelineResult<TabularDataset>, PipelineError> {
        Ok(prepare_dataset(dataset, &self.config.preparation)?)
    }

    /// Prepare, encode and run.
    pub fn run_dataset(
        &self,
        dataset: &TabularDataset,
    ) -> Result<PipelineResult<DiscoveryResult>, PipelineError> {
        self.validate()?;
        let prepared = self.prepare(dataset)?;
        let encoded = self.encoder.encode(&prepared.data);
        let skipped_rows = prepared.data.len() - encoded.data.len();

        let mut result = self.run(encoded.data)?;
        result.data.diagnostics.skipped_rows = skipped_rows;
        let mut warnings = prepared.warnings;
        warnings.extend(encoded.warnings);
        warnings.append(&mut result.warnings);
        result.warnings = warnings;
        Ok(result)
    }

    /// Run mining, generation and reduction over encoded transactions.
    pub fn run(
        &self,
        encoded: EncodedTransactions,
    ) -> Result<PipelineResult<DiscoveryResult>, PipelineError> {
        self.validate()?;
        let mut result = PipelineResult::<DiscoveryResult>::default();

        // Stage 2: frequent itemsets
        let mined = self.miner.mine(&encoded.transactions)?;
        if encoded.is_empty() {
            result.add_warning(DataError::EmptyInput("no transactions to mine".to_string()));
        } else if mined.frequent_items == 0 {
            result.add_warning(DataError::EmptyInput(
                "no item reaches the support threshold".to_string(),
            ));
        }

        // Stage 3: rules
        let targets = encoded.target_ids();
        let rules = self.generator.generate(&mined.itemsets, &targets)?;

        // Stage 4: reduction
        let reduced_rules = self.reducer.reduce(&rules)?;

        let diagnostics = DiscoveryDiagnostics {
            transactions: encoded.len(),
            skipped_rows: 0,
            frequent_items: mined.frequent_items,
            itemsets: mined.itemsets.len(),
            generated_rules: rules.len(),
            reduced_rules: reduced_rules.len(),
        };
        tracing::info!(%diagnostics, "discovery finished");

        result.data = DiscoveryResult {
            vocabulary: encoded.vocabulary,
            itemsets: mined.itemsets,
            rules,
            reduced_rules,
            diagnostics,
        };
        Ok(result)
    }
}
