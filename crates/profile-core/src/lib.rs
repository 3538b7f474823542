//! Core types for profile histogram analysis
//!
//! This crate holds the pieces every other profile-stats crate needs: the
//! shared [`Error`] taxonomy and a handful of numeric helpers over `f64`
//! slices.

pub mod error;
pub mod numeric;

// Re-export core types
pub use error::{check_finite, check_paired, Error, Result};

/// Minimum number of entries a bin needs to be kept in a profile
pub const MIN_BIN_ENTRIES: usize = 2;

/// Largest number of bins a profile may use
///
/// Larger explicit counts, or width rules that collapse to a tiny width,
/// fail with [`Error::InvalidParameter`] instead of exhausting memory.
pub const MAX_BINS: usize = 1 << 20;
