//! Uniform bin edges and bin assignment

use profile_core::numeric::linspace;
use profile_core::{Error, Result, MAX_BINS};
use serde::Serialize;
use std::fmt;

// Relative tolerance used when checking caller-supplied edges for uniformity.
const UNIFORM_TOLERANCE: f64 = 1e-9;

/// Ordered, strictly increasing, equally spaced bin edges
///
/// `n` bins are described by `n + 1` edges. Bin `i` covers
/// `[edges[i], edges[i + 1])`; the last bin is closed on both ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Create `num_bins` equal-width bins spanning `[min, max]`
    pub fn uniform(min: f64, max: f64, num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::InvalidParameter(
                "number of bins must be at least 1".to_string(),
            ));
        }
        if num_bins > MAX_BINS {
            return Err(Error::InvalidParameter(format!(
                "{num_bins} bins requested, at most {MAX_BINS} are supported"
            )));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("bin range"));
        }
        if max <= min {
            return Err(Error::DegenerateGeometry(format!(
                "bin range [{min}, {max}] has zero width"
            )));
        }

        Ok(Self {
            edges: linspace(min, max, num_bins + 1),
        })
    }

    /// Wrap caller-supplied edges after validating them
    ///
    /// The edges must be finite, strictly increasing and equally spaced.
    pub fn from_edges(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "need at least 2 bin edges, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::non_finite("bin edges"));
        }
        if edges.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(
                "bin edges must be strictly increasing".to_string(),
            ));
        }

        let width = (edges[edges.len() - 1] - edges[0]) / (edges.len() - 1) as f64;
        let uneven = edges
            .windows(2)
            .any(|w| ((w[1] - w[0]) - width).abs() > UNIFORM_TOLERANCE * width.abs().max(1.0));
        if uneven {
            return Err(Error::InvalidInput(
                "bin edges must be equally spaced".to_string(),
            ));
        }

        Ok(Self { edges })
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    /// Always false: valid edges describe at least one bin
    pub fn is_empty(&self) -> bool {
        self.edges.len() < 2
    }

    /// All edges, including the rightmost one
    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Left edge of every bin (all edges except the last)
    pub fn left_edges(&self) -> &[f64] {
        &self.edges[..self.edges.len() - 1]
    }

    /// Lowest edge
    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    /// Highest edge
    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Common width of every bin
    pub fn width(&self) -> f64 {
        (self.upper() - self.lower()) / self.len() as f64
    }

    /// `(left, right)` edges of bin `index`
    pub fn bin_range(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.len() {
            return None;
        }
        Some((self.edges[index], self.edges[index + 1]))
    }

    /// Midpoint of bin `index`'s own edge pair
    pub fn center(&self, index: usize) -> Option<f64> {
        self.bin_range(index)
            .map(|(left, right)| (right + left) / 2.0)
    }

    /// Find which bin contains `value`
    ///
    /// Same convention as digitizing against the left edges: the index is
    /// the number of left edges `<= value`, minus one. Values equal to the
    /// upper edge land in the last bin; values outside the range give `None`.
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        if !(value >= self.lower() && value <= self.upper()) {
            return None;
        }
        let position = self.left_edges().partition_point(|&edge| edge <= value);
        Some(position - 1)
    }
}

impl fmt::Display for BinEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinEdges({} bins, range=[{:.3}, {:.3}], width={:.3})",
            self.len(),
            self.lower(),
            self.upper(),
            self.width()
        )
    }
}
