//! Core traits for choosing bin edges

use crate::edges::BinEdges;
use profile_core::Result;

/// Trait for turning a sample into uniform bin edges
///
/// Implementations must return edges that span `[min(sample), max(sample)]`
/// with equal spacing; later width calculations rely on it.
pub trait BinningStrategy {
    /// Compute the bin edges for the given sample
    fn edges(&self, sample: &[f64]) -> Result<BinEdges>;
}

impl<S: BinningStrategy + ?Sized> BinningStrategy for &S {
    fn edges(&self, sample: &[f64]) -> Result<BinEdges> {
        (**self).edges(sample)
    }
}
