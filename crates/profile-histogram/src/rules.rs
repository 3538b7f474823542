//! Bin-count selection rules
//!
//! Width-based rules estimate an optimal bin width `h` from the sample and
//! use `ceil(ptp / h)` equal-width bins over `[min, max]`; a rule that yields a
//! zero width falls back to a single bin.

use crate::edges::BinEdges;
use crate::traits::BinningStrategy;
use num_traits::ToPrimitive;
use profile_core::numeric::{iqr, mean, min_max, population_std, ptp};
use profile_core::{check_finite, Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// How many equal-width bins to use for the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// The smaller width of Freedman-Diaconis and Sturges
    ///
    /// Falls back to Sturges when the IQR is zero.
    #[default]
    Auto,
    /// h = 2 * IQR * n^(-1/3)
    FreedmanDiaconis,
    /// h = ptp / (log2(n) + 1)
    Sturges,
    /// h = (24 * sqrt(pi) / n)^(1/3) * σ
    Scott,
    /// h = ptp / (2 * n^(1/3))
    Rice,
    /// h = ptp / sqrt(n)
    Sqrt,
    /// Sturges corrected for skewness
    Doane,
    /// An explicit number of bins
    Count(usize),
}

impl BinRule {
    /// Estimated bin width for this rule
    ///
    /// `Count(n)` reports `ptp / n`. Rules may return 0.0 when the sample has
    /// no spread by their measure.
    pub fn bin_width(&self, sample: &[f64]) -> f64 {
        let n = sample.len() as f64;
        match self {
            BinRule::Auto => {
                let fd = BinRule::FreedmanDiaconis.bin_width(sample);
                let sturges = BinRule::Sturges.bin_width(sample);
                if fd > 0.0 {
                    fd.min(sturges)
                } else {
                    sturges
                }
            }
            BinRule::FreedmanDiaconis => 2.0 * iqr(sample) * n.powf(-1.0 / 3.0),
            BinRule::Sturges => ptp(sample) / (n.log2() + 1.0),
            BinRule::Scott => (24.0 * PI.sqrt() / n).powf(1.0 / 3.0) * population_std(sample),
            BinRule::Rice => ptp(sample) / (2.0 * n.powf(1.0 / 3.0)),
            BinRule::Sqrt => ptp(sample) / n.sqrt(),
            BinRule::Doane => doane_width(sample),
            BinRule::Count(count) => ptp(sample) / (*count).max(1) as f64,
        }
    }

    /// Number of bins this rule picks for the sample
    pub fn bin_count(&self, sample: &[f64]) -> Result<usize> {
        if let BinRule::Count(count) = self {
            if *count == 0 {
                return Err(Error::InvalidParameter(
                    "bin count must be a positive integer".to_string(),
                ));
            }
            return Ok(*count);
        }

        let width = self.bin_width(sample);
        if !(width > 0.0 && width.is_finite()) {
            return Ok(1);
        }

        (ptp(sample) / width)
            .ceil()
            .to_usize()
            .map(|count| count.max(1))
            .ok_or_else(|| {
                Error::Computation(format!("{self} produced an unrepresentable bin count"))
            })
    }
}

fn doane_width(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n <= 2 {
        return 0.0;
    }
    let n_f = n as f64;
    let sg1 = (6.0 * (n_f - 2.0) / ((n_f + 1.0) * (n_f + 3.0))).sqrt();
    let sigma = population_std(sample);
    if sigma <= 0.0 {
        return 0.0;
    }
    let m = mean(sample);
    let g1 = sample
        .iter()
        .map(|&x| ((x - m) / sigma).powi(3))
        .sum::<f64>()
        / n_f;
    ptp(sample) / (1.0 + n_f.log2() + (1.0 + g1.abs() / sg1).log2())
}

impl BinningStrategy for BinRule {
    fn edges(&self, sample: &[f64]) -> Result<BinEdges> {
        if sample.len() < 2 {
            return Err(Error::too_few_samples(2, sample.len()));
        }
        check_finite(sample, "x_data")?;

        let (min, max) = min_max(sample).ok_or_else(Error::empty_input)?;
        if max <= min {
            return Err(Error::DegenerateGeometry(format!(
                "all {} x values equal {min}; bins would have zero width",
                sample.len()
            )));
        }

        let count = self.bin_count(sample)?;
        BinEdges::uniform(min, max, count)
    }
}

impl From<usize> for BinRule {
    fn from(count: usize) -> Self {
        BinRule::Count(count)
    }
}

impl fmt::Display for BinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinRule::Auto => f.write_str("auto"),
            BinRule::FreedmanDiaconis => f.write_str("fd"),
            BinRule::Sturges => f.write_str("sturges"),
            BinRule::Scott => f.write_str("scott"),
            BinRule::Rice => f.write_str("rice"),
            BinRule::Sqrt => f.write_str("sqrt"),
            BinRule::Doane => f.write_str("doane"),
            BinRule::Count(count) => write!(f, "{count}"),
        }
    }
}

impl FromStr for BinRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BinRule::Auto),
            "fd" | "freedman-diaconis" | "freedman_diaconis" => Ok(BinRule::FreedmanDiaconis),
            "sturges" => Ok(BinRule::Sturges),
            "scott" => Ok(BinRule::Scott),
            "rice" => Ok(BinRule::Rice),
            "sqrt" => Ok(BinRule::Sqrt),
            "doane" => Ok(BinRule::Doane),
            other => other
                .parse::<usize>()
                .map(BinRule::Count)
                .map_err(|_| Error::InvalidParameter(format!("unknown bin rule '{s}'"))),
        }
    }
}
