//! Pluggable discretization of numeric columns.

/// Maps raw numeric column values to a small finite label set.
///
/// The mining engine never sees numbers: whichever binning policy is
/// plugged in, the encoder only receives the labels. `None` inputs are
/// missing values; `None` outputs mean the value could not be binned.
pub trait Discretizer: Send + Sync {
    /// Short policy name, used in logs.
    fn name(&self) -> &str;

    /// Label every value. The output has the same length as `values`.
    fn labels(&self, values: &[Option<f64>]) -> Vec<Option<String>>;
}
