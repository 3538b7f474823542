//! Numeric helpers over `f64` slices
//!
//! These mirror the conventions of array libraries: `population_std` uses
//! `ddof = 0`, `percentile` interpolates linearly between order statistics.

use num_traits::ToPrimitive;

/// Calculate the mean of a slice
///
/// Returns NaN for empty slices.
///
/// # Examples
///
/// ```rust
/// use profile_core::numeric::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population standard deviation (divides by `n`)
///
/// Two-pass: the mean is computed first, then the mean squared deviation.
/// Returns NaN for empty slices.
///
/// ```rust
/// use profile_core::numeric::population_std;
///
/// let sd = population_std(&[1.0, 2.0, 3.0]);
/// assert!((sd - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
/// ```
pub fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let m = mean(data);
    let variance = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;
    variance.sqrt()
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Peak-to-peak range (`max - min`), 0.0 for empty slices
pub fn ptp(data: &[f64]) -> f64 {
    min_max(data).map_or(0.0, |(lo, hi)| hi - lo)
}

/// Sort data and return a new vector
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear-interpolated percentile of pre-sorted data, `q` in `[0, 100]`
///
/// Uses the "linear" method: the virtual index is `q / 100 * (n - 1)`.
/// Returns NaN for empty input.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 100.0);
    let position = q / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor();
    let frac = position - lower;
    let lo = lower.to_usize().unwrap_or(0).min(sorted.len() - 1);
    let hi = (lo + 1).min(sorted.len() - 1);
    lerp(sorted[lo], sorted[hi], frac)
}

/// Interquartile range of unsorted data
pub fn iqr(data: &[f64]) -> f64 {
    let sorted = sorted(data);
    percentile_sorted(&sorted, 75.0) - percentile_sorted(&sorted, 25.0)
}

// Interpolating from the nearer end keeps lerp(a, b, 1.0) == b exactly.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// `n` evenly spaced values from `start` to `stop` inclusive
///
/// The last value is set to `stop` exactly so ranges never overshoot.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}
