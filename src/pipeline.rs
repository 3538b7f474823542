//! End-to-end profile histogram pipeline: bin, fit, render, write

use profile_core::{check_paired, Result};
use profile_histogram::{BinRule, ErrorFormula, ProfileBuilder, ProfileHistogram};
use profile_regression::{linregress, LinearRegression};
use profile_viz::{
    write_outputs, AxisLabels, OutputTarget, ProfileFigure, RenderOptions, SystemViewer, Viewer,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Numbers behind a profile histogram chart
#[derive(Debug, Clone, Serialize)]
pub struct ProfileAnalysis {
    /// Binned y statistics; only bins with two or more entries are kept
    pub histogram: ProfileHistogram,
    /// Least-squares line through the bin means
    pub regression: LinearRegression,
    /// Fitted line evaluated at each surviving bin center
    pub fit_values: Vec<f64>,
    /// Half the distance between the first two surviving centers
    pub half_bin_width: f64,
}

/// Outcome of [`ProfileHistogramBuilder::build`]
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub analysis: ProfileAnalysis,
    /// Files written, in the order given; empty when the chart was shown
    pub written: Vec<PathBuf>,
}

/// Configures and runs the profile histogram pipeline
///
/// ```rust,no_run
/// use profile_stats::{BinRule, ProfileHistogramBuilder};
///
/// let x = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];
/// let y = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
///
/// let report = ProfileHistogramBuilder::new()
///     .bins(BinRule::Count(3))
///     .x_label("x")
///     .y_label("y")
///     .output("profile.png")
///     .build(&x, &y)
///     .unwrap();
/// assert_eq!(report.written.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileHistogramBuilder<V = SystemViewer> {
    bins: BinRule,
    error_formula: ErrorFormula,
    labels: AxisLabels,
    output: OutputTarget,
    render_options: RenderOptions,
    viewer: V,
}

impl ProfileHistogramBuilder<SystemViewer> {
    /// Automatic binning, no labels, interactive display
    pub fn new() -> Self {
        Self {
            bins: BinRule::default(),
            error_formula: ErrorFormula::default(),
            labels: AxisLabels::default(),
            output: OutputTarget::default(),
            render_options: RenderOptions::default(),
            viewer: SystemViewer::default(),
        }
    }
}

impl Default for ProfileHistogramBuilder<SystemViewer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Viewer> ProfileHistogramBuilder<V> {
    /// Bin rule, or an explicit count via `usize`
    pub fn bins(mut self, bins: impl Into<BinRule>) -> Self {
        self.bins = bins.into();
        self
    }

    /// Sets the x axis label
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.labels.x = Some(label.into());
        self
    }

    /// Sets the y axis label
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.labels.y = Some(label.into());
        self
    }

    /// Chart title, drawn only with [`RenderOptions::draw_title`]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.labels.title = Some(title.into());
        self
    }

    /// Replaces both axis labels and the title at once; `None` fields stay unset
    pub fn labels(mut self, labels: AxisLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Where the chart goes: a path, several paths, or `Show`
    pub fn output(mut self, output: impl Into<OutputTarget>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets how the per-bin error is derived from rms and entry count
    pub fn error_formula(mut self, formula: ErrorFormula) -> Self {
        self.error_formula = formula;
        self
    }

    /// Sets image size, fonts, cap width and the title flag
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Replace the viewer used for [`OutputTarget::Show`]
    pub fn viewer<W: Viewer>(self, viewer: W) -> ProfileHistogramBuilder<W> {
        ProfileHistogramBuilder {
            bins: self.bins,
            error_formula: self.error_formula,
            labels: self.labels,
            output: self.output,
            render_options: self.render_options,
            viewer,
        }
    }

    /// The configured output target
    pub fn output_target(&self) -> &OutputTarget {
        &self.output
    }

    /// Bin, aggregate and fit without rendering
    #[instrument(level = "debug", skip_all, fields(samples = x.len(), bins = %self.bins))]
    pub fn analyze(&self, x: &[f64], y: &[f64]) -> Result<ProfileAnalysis> {
        check_paired(x, y)?;
        let histogram = ProfileBuilder::new(self.bins)
            .error_formula(self.error_formula)
            .build(x, y)?;
        let half_bin_width = histogram.half_bin_width()?;

        let centers = histogram.centers();
        let regression = linregress(&centers, &histogram.means())?;
        let fit_values = regression.predict_all(&centers);
        debug!(
            populated = histogram.len(),
            skipped = histogram.skipped_indices().len(),
            %regression,
            "profile analysis complete"
        );

        Ok(ProfileAnalysis {
            histogram,
            regression,
            fit_values,
            half_bin_width,
        })
    }

    /// Analyze and lay out the chart without writing anything
    pub fn figure(&self, x: &[f64], y: &[f64]) -> Result<ProfileFigure> {
        let analysis = self.analyze(x, y)?;
        self.figure_for(&analysis)
    }

    /// Run the whole pipeline and deliver the chart to its output target
    #[instrument(level = "debug", skip_all, fields(samples = x.len()))]
    pub fn build(&self, x: &[f64], y: &[f64]) -> Result<ProfileReport> {
        let analysis = self.analyze(x, y)?;
        let figure = self.figure_for(&analysis)?;
        let written = write_outputs(&figure, &self.output, &self.viewer)?;
        Ok(ProfileReport { analysis, written })
    }

    fn figure_for(&self, analysis: &ProfileAnalysis) -> Result<ProfileFigure> {
        Ok(ProfileFigure::new(&analysis.histogram, analysis.regression)?
            .with_labels(self.labels.clone())
            .with_options(self.render_options.clone()))
    }
}
