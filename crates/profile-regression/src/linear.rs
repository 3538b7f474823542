//! Ordinary least-squares fit of a straight line

use profile_core::numeric::mean;
use profile_core::{check_finite, check_paired, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;
use tracing::{debug, instrument};

// Keeps the t statistic finite when |r| == 1.
const TINY: f64 = 1e-20;

/// Result of a straight-line least-squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Pearson correlation coefficient, in [-1, 1]
    pub r_value: f64,
    /// Two-sided p-value for the null hypothesis `slope == 0`
    pub p_value: f64,
    /// Standard error of the slope
    pub stderr: f64,
    /// Standard error of the intercept
    pub intercept_stderr: f64,
    /// Number of points fitted
    pub n: usize,
}

impl LinearRegression {
    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Values of the fitted line at every `x`
    pub fn predict_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Coefficient of determination
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

impl fmt::Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y = {:.4} * x + {:.4} (r={:.4}, p={:.4}, n={})",
            self.slope, self.intercept, self.r_value, self.p_value, self.n
        )
    }
}

/// Something that fits a straight line through paired points
pub trait LineFitter {
    /// Fit a line through `(x[i], y[i])`
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LinearRegression>;
}

/// Plain ordinary least squares, see [`linregress`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryLeastSquares;

impl LineFitter for OrdinaryLeastSquares {
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LinearRegression> {
        linregress(x, y)
    }
}

/// Least-squares regression of `y` on `x`
///
/// Uses the biased (divide-by-n) second moments. `r` is clamped to [-1, 1]
/// and reported as 0 when y has no spread. With exactly
/// two points the p-value is 1 for equal y values and 0 otherwise, and both
/// standard errors are 0.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `x` and `y` differ in length
/// - [`Error::InsufficientData`] with fewer than 2 points
/// - [`Error::DegenerateGeometry`] if every x value is identical
#[instrument(level = "debug", skip_all, fields(points = x.len()))]
pub fn linregress(x: &[f64], y: &[f64]) -> Result<LinearRegression> {
    check_paired(x, y)?;
    if x.len() < 2 {
        return Err(Error::too_few_samples(2, x.len()));
    }
    check_finite(x, "regression x")?;
    check_finite(y, "regression y")?;

    let n = x.len();
    let n_f = n as f64;
    let x_mean = mean(x);
    let y_mean = mean(y);

    let mut ssxm = 0.0;
    let mut ssxym = 0.0;
    let mut ssym = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        ssxm += dx * dx;
        ssxym += dx * dy;
        ssym += dy * dy;
    }
    ssxm /= n_f;
    ssxym /= n_f;
    ssym /= n_f;

    if ssxm == 0.0 {
        return Err(Error::DegenerateGeometry(
            "cannot fit a line when all x values are identical".to_string(),
        ));
    }

    let r_den = (ssxm * ssym).sqrt();
    let r_value = if r_den == 0.0 {
        0.0
    } else {
        (ssxym / r_den).clamp(-1.0, 1.0)
    };

    let slope = ssxym / ssxm;
    let intercept = y_mean - slope * x_mean;

    let (p_value, stderr) = if n == 2 {
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0)
    } else {
        let df = n_f - 2.0;
        let t = r_value * (df / ((1.0 - r_value + TINY) * (1.0 + r_value + TINY))).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        let p = (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0);
        let se = ((1.0 - r_value * r_value) * ssym / ssxm / df).sqrt();
        (p, se)
    };
    let intercept_stderr = stderr * (ssxm + x_mean * x_mean).sqrt();

    let fit = LinearRegression {
        slope,
        intercept,
        r_value,
        p_value,
        stderr,
        intercept_stderr,
        n,
    };
    debug!(%fit, "fitted line");
    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_perfect_positive_line() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let fit = linregress(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_value, 1.0, epsilon = 1e-12);
        assert!(fit.p_value < 1e-6);
        assert_abs_diff_eq!(fit.stderr, 0.0, epsilon = 1e-6);
        assert_eq!(fit.n, 5);
    }

    #[test]
    fn test_profile_centers_fit() {
        // Means 2, 5, 8 at the centers of three bins over [1, 3]
        let x = vec![4.0 / 3.0, 2.0, 8.0 / 3.0];
        let y = vec![2.0, 5.0, 8.0];
        let fit = linregress(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 4.5, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, -4.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_correlation() {
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![3.0, 2.0, 1.0, 0.0];
        let fit = linregress(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_value, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_fit_statistics() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = linregress(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 0.6, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 2.2, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.p_value, 0.1240, epsilon = 1e-3);
        assert_relative_eq!(fit.stderr, 0.08f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(
            fit.intercept_stderr,
            0.08f64.sqrt() * 11f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_two_points() {
        let fit = linregress(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        assert_relative_eq!(fit.slope, 2.0);
        assert_eq!(fit.p_value, 0.0);
        assert_eq!(fit.stderr, 0.0);
        assert_eq!(fit.intercept_stderr, 0.0);

        let flat = linregress(&[0.0, 1.0], &[2.0, 2.0]).unwrap();
        assert_eq!(flat.p_value, 1.0);
        assert_eq!(flat.r_value, 0.0);
    }

    #[test]
    fn test_constant_y_has_zero_correlation() {
        let fit = linregress(&[1.0, 2.0, 3.0, 4.0], &[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(fit.r_value, 0.0);
        assert_eq!(fit.slope, 0.0);
        assert_relative_eq!(fit.intercept, 5.0);
        assert_relative_eq!(fit.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_predict() {
        let fit = linregress(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-12);
        let ys = fit.predict_all(&[0.0, 0.5]);
        assert_relative_eq!(ys[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(ys[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_failure_classes() {
        assert!(matches!(
            linregress(&[1.0, 2.0], &[1.0]),
            Err(Error::LengthMismatch { x: 2, y: 1 })
        ));
        assert!(matches!(
            linregress(&[1.0], &[1.0]),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            linregress(&[], &[]),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            linregress(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_fitter_trait() {
        let fit = OrdinaryLeastSquares
            .fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])
            .unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert!(fit.to_string().starts_with("y = 2.0000 * x"));
    }
}
