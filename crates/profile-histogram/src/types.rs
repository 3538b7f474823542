//! Core types for profile histogram representation

use crate::edges::BinEdges;
use profile_core::{Error, Result, MIN_BIN_ENTRIES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the per-bin `error` column is derived from `rms` and the entry count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorFormula {
    /// `rms / count`
    ///
    /// This is what existing profile plots show. It is probably meant to be
    /// the standard error of the mean, which divides by `sqrt(count)`.
    #[default]
    PerCount,
    /// `rms / sqrt(count)`, the standard error of the mean
    StandardErrorOfMean,
}

impl ErrorFormula {
    /// Compute the error for a bin with the given spread and entry count
    pub fn apply(&self, rms: f64, count: usize) -> f64 {
        let n = count as f64;
        match self {
            ErrorFormula::PerCount => rms / n,
            ErrorFormula::StandardErrorOfMean => rms / n.sqrt(),
        }
    }
}

/// Statistics of the y values collected in one populated x bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBin {
    /// Index of the bin among all bins, including skipped ones
    pub index: usize,
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of (x, y) pairs in this bin
    pub count: usize,
    /// Mean of y
    pub mean: f64,
    /// Population standard deviation of y
    pub rms: f64,
    /// Error on the mean, see [`ErrorFormula`]
    pub error: f64,
}

impl ProfileBin {
    /// Midpoint of the bin's own edge pair
    pub fn center(&self) -> f64 {
        (self.right + self.left) / 2.0
    }

    /// Width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for ProfileBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{:.3}, {:.3}): n={}, mean={:.3}, rms={:.3}, error={:.3}",
            self.index, self.left, self.right, self.count, self.mean, self.rms, self.error
        )
    }
}

/// Binned means of y as a function of x
///
/// Only bins with at least two entries are kept in [`bins`](Self::bins);
/// the full occupancy of every bin is still available for inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileHistogram {
    edges: BinEdges,
    bins: Vec<ProfileBin>,
    occupancy: Vec<usize>,
    total_count: usize,
}

impl ProfileHistogram {
    /// Create a new profile histogram
    pub fn new(
        edges: BinEdges,
        bins: Vec<ProfileBin>,
        occupancy: Vec<usize>,
        total_count: usize,
    ) -> Self {
        Self {
            edges,
            bins,
            occupancy,
            total_count,
        }
    }

    /// Populated bins, in x order
    pub fn bins(&self) -> &[ProfileBin] {
        &self.bins
    }

    /// Number of populated bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if no bin survived the occupancy filter
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Edges of all bins, populated or not
    pub fn edges(&self) -> &BinEdges {
        &self.edges
    }

    /// Entry count of every bin, populated or not
    pub fn occupancy(&self) -> &[usize] {
        &self.occupancy
    }

    /// Indices of the bins dropped for having fewer than two entries
    pub fn skipped_indices(&self) -> Vec<usize> {
        self.occupancy
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count < MIN_BIN_ENTRIES)
            .map(|(index, _)| index)
            .collect()
    }

    /// Total number of (x, y) pairs binned
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Bin centers of the populated bins
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(ProfileBin::center).collect()
    }

    /// Means of the populated bins
    pub fn means(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.mean).collect()
    }

    /// Population standard deviations of the populated bins
    pub fn rms_values(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.rms).collect()
    }

    /// Errors of the populated bins
    pub fn errors(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.error).collect()
    }

    /// Half the distance between the first two populated bin centers
    ///
    /// Assumes the populated bins are adjacent; with a gap between the first
    /// two, the result spans the gap too.
    pub fn half_bin_width(&self) -> Result<f64> {
        match self.bins.as_slice() {
            [first, second, ..] => Ok((second.center() - first.center()).abs() / 2.0),
            _ => Err(Error::too_few_bins(MIN_BIN_ENTRIES, self.bins.len())),
        }
    }
}

impl fmt::Display for ProfileHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProfileHistogram({}/{} bins populated, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.edges.len(),
            self.total_count,
            self.edges.lower(),
            self.edges.upper()
        )
    }
}
