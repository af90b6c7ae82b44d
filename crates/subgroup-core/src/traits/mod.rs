//! Capability traits implemented outside the core.

pub mod discretizer;

pub use discretizer::Discretizer;
