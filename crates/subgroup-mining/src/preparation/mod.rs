//! Data preparation layer: delimited loading, column shaping, discretization.
//!
//! Everything here runs before the mining engine and only exists to produce
//! the categorical table the transaction encoder consumes.

pub mod dataset;
pub mod delimited;
pub mod discretize;
pub mod prepare;

pub use dataset::TabularDataset;
pub use delimited::DelimitedReader;
pub use discretize::{build_discretizer, discretize_column, EqualWidth, ManualBins, QuantileBins};
pub use prepare::{derive_flag, prepare_dataset};
