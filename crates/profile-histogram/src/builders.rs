//! Profile construction: bin assignment and per-bin aggregation

use crate::edges::BinEdges;
use crate::rules::BinRule;
use crate::traits::BinningStrategy;
use crate::types::{ErrorFormula, ProfileBin, ProfileHistogram};
use profile_core::numeric::{mean, population_std};
use profile_core::{check_finite, check_paired, Result, MIN_BIN_ENTRIES};
use tracing::{debug, instrument};

/// Builds a [`ProfileHistogram`] from paired samples
///
/// Edges come from the binning strategy applied to x. Every pair is assigned
/// to the bin containing its x, and each bin with at least two entries gets
/// its y mean, rms and error computed in a single pass.
#[derive(Debug, Clone)]
pub struct ProfileBuilder<S = BinRule> {
    strategy: S,
    error_formula: ErrorFormula,
}

impl ProfileBuilder<BinRule> {
    /// Create a builder using one of the built-in bin rules
    pub fn new(rule: BinRule) -> Self {
        Self::with_strategy(rule)
    }
}

impl Default for ProfileBuilder<BinRule> {
    fn default() -> Self {
        Self::new(BinRule::Auto)
    }
}

impl<S: BinningStrategy> ProfileBuilder<S> {
    /// Create a builder with a custom binning strategy
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            strategy,
            error_formula: ErrorFormula::default(),
        }
    }

    /// Choose how the per-bin error is derived
    pub fn error_formula(mut self, formula: ErrorFormula) -> Self {
        self.error_formula = formula;
        self
    }

    /// The binning strategy in use
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Bin `y` by `x` using edges from the strategy
    #[instrument(level = "debug", skip_all, fields(samples = x.len()))]
    pub fn build(&self, x: &[f64], y: &[f64]) -> Result<ProfileHistogram> {
        check_paired(x, y)?;
        let edges = self.strategy.edges(x)?;
        debug!(%edges, "computed bin edges");
        self.build_with_edges(edges, x, y)
    }

    /// Bin `y` by `x` using caller-supplied edges
    ///
    /// Pairs whose x falls outside the edges are not counted.
    pub fn build_with_edges(
        &self,
        edges: BinEdges,
        x: &[f64],
        y: &[f64],
    ) -> Result<ProfileHistogram> {
        check_paired(x, y)?;
        check_finite(x, "x_data")?;
        check_finite(y, "y_data")?;

        let mut binned: Vec<Vec<f64>> = vec![Vec::new(); edges.len()];
        let mut outside = 0usize;
        for (&x_val, &y_val) in x.iter().zip(y) {
            match edges.find_bin(x_val) {
                Some(index) => binned[index].push(y_val),
                None => outside += 1,
            }
        }
        if outside > 0 {
            debug!(outside, "samples fell outside the bin edges");
        }

        let occupancy: Vec<usize> = binned.iter().map(Vec::len).collect();
        let total_count = occupancy.iter().sum();

        let bounds = edges.as_slice();
        let mut bins = Vec::with_capacity(binned.len());
        for (index, values) in binned.iter().enumerate() {
            let count = values.len();
            if count < MIN_BIN_ENTRIES {
                continue;
            }
            let rms = population_std(values);
            bins.push(ProfileBin {
                index,
                left: bounds[index],
                right: bounds[index + 1],
                count,
                mean: mean(values),
                rms,
                error: self.error_formula.apply(rms, count),
            });
        }

        debug!(
            populated = bins.len(),
            total_bins = edges.len(),
            "aggregated profile bins"
        );

        Ok(ProfileHistogram::new(edges, bins, occupancy, total_count))
    }
}
