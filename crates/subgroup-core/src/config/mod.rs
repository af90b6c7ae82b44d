//! Configuration system for the subgroup engine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod defaults;
pub mod mining_config;
pub mod output_config;
pub mod preparation_config;
pub mod reduction_config;
pub mod rule_config;
pub mod subgroup_config;

pub use mining_config::MiningConfig;
pub use output_config::OutputConfig;
pub use preparation_config::{
    DerivedFlagConfig, DiscretizeConfig, DiscretizeMethod, PreparationConfig,
};
pub use reduction_config::ReductionConfig;
pub use rule_config::RuleConfig;
pub use subgroup_config::{CliOverrides, SubgroupConfig};
