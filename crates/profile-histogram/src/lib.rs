//! Binned y statistics as a function of x
//!
//! This crate turns paired `(x, y)` samples into a profile histogram: x is
//! split into equal-width bins, and for every bin holding at least two pairs
//! the mean, population standard deviation ("rms") and error of y are
//! reported.
//!
//! # Key Features
//!
//! - **Bin rules**: explicit counts or width heuristics (Freedman-Diaconis,
//!   Sturges, Scott, Rice, sqrt, Doane, and `Auto`)
//! - **Skip rule**: bins with 0 or 1 entries are dropped, never zero-filled
//! - **Stable geometry**: every kept bin remembers its original index and edges
//!
//! # Example
//!
//! ```rust
//! use profile_histogram::{BinRule, ProfileBuilder};
//!
//! let x = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];
//! let y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! let profile = ProfileBuilder::new(BinRule::Count(3)).build(&x, &y).unwrap();
//! assert_eq!(profile.means(), vec![2.0, 5.0, 8.0]);
//!
//! for bin in profile.bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod builders;
pub mod edges;
pub mod rules;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::ProfileBuilder;
pub use edges::BinEdges;
pub use rules::BinRule;
pub use traits::BinningStrategy;
pub use types::{ErrorFormula, ProfileBin, ProfileHistogram};

pub use profile_core::Result;

/// Build a profile histogram with the given bin rule and default error formula
pub fn profile(x: &[f64], y: &[f64], rule: BinRule) -> Result<ProfileHistogram> {
    ProfileBuilder::new(rule).build(x, y)
}
