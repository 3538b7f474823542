//! Straight-line fits for profile histograms
//!
//! Provides [`linregress`], an ordinary least-squares fit returning slope,
//! intercept, correlation coefficient, p-value and standard errors, and the
//! [`LineFitter`] trait so callers can swap in another fitting routine.
//!
//! ```rust
//! use profile_regression::linregress;
//!
//! let fit = linregress(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.r_value - 1.0).abs() < 1e-12);
//! ```

pub mod linear;

pub use linear::{linregress, LineFitter, LinearRegression, OrdinaryLeastSquares};

pub use profile_core::Result;
