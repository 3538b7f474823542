//! Property-based tests for the fitted line and legend placement

use proptest::prelude::*;
use profile_stats::{linregress, BinRule, LegendPosition, NullViewer, ProfileHistogramBuilder};

fn linear_samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, f64)> {
    (
        prop::collection::vec((-50.0f64..50.0, -0.1f64..0.1), 20..200),
        -5.0f64..5.0,
    )
        .prop_map(|(pairs, slope)| {
            let (x, noise): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let y = x.iter().zip(&noise).map(|(x, e)| slope * x + 2.0 + e).collect();
            (x, y, slope)
        })
}

proptest! {
    // Property: the fitted line passes through the mean of the bin points
    #[test]
    fn prop_fit_passes_through_centroid((x, y, _slope) in linear_samples(), bins in 2usize..12) {
        let builder = ProfileHistogramBuilder::new().bins(BinRule::Count(bins)).viewer(NullViewer);
        let analysis = match builder.analyze(&x, &y) {
            Ok(analysis) => analysis,
            Err(err) => {
                prop_assume!(!err.is_insufficient_data());
                return Err(TestCaseError::fail(err.to_string()));
            }
        };

        let centers = analysis.histogram.centers();
        let means = analysis.histogram.means();
        let n = centers.len() as f64;
        let cx = centers.iter().sum::<f64>() / n;
        let cy = means.iter().sum::<f64>() / n;
        let fit = analysis.regression;
        prop_assert!((fit.predict(cx) - cy).abs() <= 1e-6 * (1.0 + cy.abs()));
        prop_assert!((-1.0..=1.0).contains(&fit.r_value));
        prop_assert_eq!(analysis.fit_values.len(), centers.len());

        // The pipeline fit is exactly the regression of the bin points
        let direct = linregress(&centers, &means).unwrap();
        prop_assert_eq!(fit.n, direct.n);
        for (name, got, want) in [
            ("slope", fit.slope, direct.slope),
            ("intercept", fit.intercept, direct.intercept),
            ("r_value", fit.r_value, direct.r_value),
            ("p_value", fit.p_value, direct.p_value),
            ("stderr", fit.stderr, direct.stderr),
            ("intercept_stderr", fit.intercept_stderr, direct.intercept_stderr),
        ] {
            prop_assert!(got.to_bits() == want.to_bits(), "{} differs: {} vs {}", name, got, want);
        }
    }

    // Property: the legend sits lower right exactly when r >= 0
    #[test]
    fn prop_legend_follows_correlation((x, y, _slope) in linear_samples()) {
        let builder = ProfileHistogramBuilder::new().bins(BinRule::Count(6)).viewer(NullViewer);
        let figure = match builder.figure(&x, &y) {
            Ok(figure) => figure,
            Err(err) => {
                prop_assume!(!err.is_insufficient_data());
                return Err(TestCaseError::fail(err.to_string()));
            }
        };

        let expected = if figure.fit().r_value >= 0.0 {
            LegendPosition::LowerRight
        } else {
            LegendPosition::UpperRight
        };
        prop_assert_eq!(figure.legend_position(), expected);
        prop_assert_eq!(
            figure.legend_entries()[0].clone(),
            format!("R: {:.2}", figure.fit().r_value)
        );
    }

    // Property: a steep trend is recovered with the right sign
    #[test]
    fn prop_slope_sign_recovered((x, y, slope) in linear_samples()) {
        prop_assume!(slope.abs() > 0.5);
        let builder = ProfileHistogramBuilder::new().bins(BinRule::Count(5)).viewer(NullViewer);
        if let Ok(analysis) = builder.analyze(&x, &y) {
            prop_assert_eq!(analysis.regression.slope.signum(), slope.signum());
        }
    }
}
