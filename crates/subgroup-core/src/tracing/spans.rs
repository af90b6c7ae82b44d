//! Span names shared by all stages.

/// Span: transaction encoding.
pub const SPAN_ENCODE: &str = "subgroup.encode";
/// Span: frequent itemset mining.
pub const SPAN_MINE: &str = "subgroup.mine";
/// Span: rule generation.
pub const SPAN_GENERATE: &str = "subgroup.generate";
/// Span: rule reduction.
pub const SPAN_REDUCE: &str = "subgroup.reduce";

