//! # Profile Stats
//!
//! Profile histograms for paired `(x, y)` data: x is split into equal-width
//! bins, each bin with at least two entries reports the mean, rms and error
//! of its y values, a straight line is fitted through the bin means, and the
//! result is drawn as an annotated chart.
//!
//! ## Crates
//!
//! - [`profile_core`]: shared error type and numeric helpers
//! - [`profile_histogram`]: bin rules, bin assignment and per-bin statistics
//! - [`profile_regression`]: ordinary least-squares line fit
//! - [`profile_viz`]: chart layout, image formats and output targets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use profile_stats::build_profile_histogram;
//!
//! let x: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| 2.0 * v + (v * 7.0).sin()).collect();
//!
//! let report = build_profile_histogram(
//!     &x,
//!     &y,
//!     10usize,
//!     "x",
//!     "y",
//!     "trend",
//!     ["profile.png", "profile-copy.png"],
//! )
//! .unwrap();
//! println!("{}", report.analysis.regression);
//! ```

pub mod pipeline;

pub use pipeline::{ProfileAnalysis, ProfileHistogramBuilder, ProfileReport};

pub use profile_core::{Error, Result};
pub use profile_histogram::{
    BinEdges, BinRule, BinningStrategy, ErrorFormula, ProfileBin, ProfileBuilder,
    ProfileHistogram,
};
pub use profile_regression::{linregress, LineFitter, LinearRegression, OrdinaryLeastSquares};
pub use profile_viz::{
    write_outputs, AxisLabels, ImageFormat, LegendPosition, NullViewer, OutputTarget,
    ProfileFigure, RenderOptions, SystemViewer, Viewer,
};

pub use profile_core;
pub use profile_histogram;
pub use profile_regression;
pub use profile_viz;

/// Build a profile histogram in one call
///
/// `bins` is a [`BinRule`] or an explicit count. `output` is anything that
/// converts into an [`OutputTarget`]: a path, a list of paths, or
/// `None::<&str>` for interactive display. Labels and title take either a
/// string or `None` to leave them unset. The title is recorded but not
/// drawn; use [`ProfileHistogramBuilder`] with
/// [`RenderOptions::draw_title`] to show it.
pub fn build_profile_histogram<'a>(
    x_data: &[f64],
    y_data: &[f64],
    bins: impl Into<BinRule>,
    x_label: impl Into<Option<&'a str>>,
    y_label: impl Into<Option<&'a str>>,
    plot_title: impl Into<Option<&'a str>>,
    output: impl Into<OutputTarget>,
) -> Result<ProfileReport> {
    let labels = AxisLabels {
        x: x_label.into().map(str::to_owned),
        y: y_label.into().map(str::to_owned),
        title: plot_title.into().map(str::to_owned),
    };
    ProfileHistogramBuilder::new()
        .bins(bins)
        .labels(labels)
        .output(output)
        .build(x_data, y_data)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        build_profile_histogram, BinRule, Error, ErrorFormula, OutputTarget,
        ProfileHistogramBuilder, RenderOptions, Result,
    };
}
