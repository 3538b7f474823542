//! Error types for profile histogram analysis
//!
//! Provides a unified error type for all profile-stats crates. Each failure
//! class of the binning/regression/rendering pipeline has its own variant so
//! callers can tell "not enough data" apart from "bad input" or "bad geometry".

use thiserror::Error;

/// Core error type for profile histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} {unit}, got {actual}")]
    InsufficientData {
        expected: usize,
        actual: usize,
        unit: &'static str,
    },

    /// Paired sample sequences of different lengths
    #[error("Length mismatch: x has {x} samples but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// Zero-width geometry (e.g. every x value identical)
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// NaN or infinite values in the input
    #[error("Non-finite input: {0} contains NaN or infinite values")]
    NonFinite(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Output file type that no backend can produce
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Chart rendering backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
            unit: "samples",
        }
    }

    /// Create an error for too few samples
    pub fn too_few_samples(expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            expected,
            actual,
            unit: "samples",
        }
    }

    /// Create an error for too few populated bins
    pub fn too_few_bins(expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            expected,
            actual,
            unit: "populated bins",
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }

    /// Wrap a rendering backend error
    pub fn render<E: std::fmt::Display>(err: E) -> Self {
        Self::Render(err.to_string())
    }

    /// True for the insufficient-data failure class
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Check that two paired sequences have the same length
pub fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    Ok(())
}

/// Check that every value is finite
pub fn check_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
