//! Rendering for profile histograms
//!
//! Turns a [`ProfileHistogram`](profile_histogram::ProfileHistogram) and its
//! fitted line into a chart: the fit line, a black bar spanning each bin's
//! width, a red bar for the rms and a green bar for the error, plus a legend
//! whose corner depends on the sign of the correlation.
//!
//! Figures are plain values. Nothing here touches global plotting state, so
//! figures can be built and written from several threads at once.
//!
//! # Example
//!
//! ```rust,no_run
//! use profile_histogram::{BinRule, ProfileBuilder};
//! use profile_regression::linregress;
//! use profile_viz::{AxisLabels, NullViewer, OutputTarget, ProfileFigure, write_outputs};
//!
//! let x = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];
//! let y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let hist = ProfileBuilder::new(BinRule::Count(3)).build(&x, &y).unwrap();
//! let fit = linregress(&hist.centers(), &hist.means()).unwrap();
//!
//! let figure = ProfileFigure::new(&hist, fit)
//!     .unwrap()
//!     .with_labels(AxisLabels::new().x("x").y("mean y"));
//! let written = write_outputs(&figure, &OutputTarget::from("profile.png"), &NullViewer).unwrap();
//! assert_eq!(written.len(), 1);
//! ```

pub mod figure;
pub mod options;
pub mod output;
pub mod viewer;

pub use figure::ProfileFigure;
pub use options::{AxisLabels, LegendPosition, RenderOptions};
pub use output::{write_outputs, ImageFormat, OutputTarget};
pub use viewer::{NullViewer, SystemViewer, Viewer};

pub use profile_core::Result;
