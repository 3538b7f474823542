//! The profile histogram chart
//!
//! A [`ProfileFigure`] owns everything needed to draw one chart: the bin
//! centers with their y statistics, the fitted line, labels and rendering
//! options. Drawing works against any plotters backend, so the same figure
//! can go to a bitmap file, an SVG file or an in-memory SVG string.

use crate::options::{AxisLabels, LegendPosition, RenderOptions};
use crate::output::ImageFormat;
use plotters::coord::Shift;
use plotters::prelude::*;
use profile_core::numeric::min_max;
use profile_core::{Error, Result};
use profile_histogram::ProfileHistogram;
use profile_regression::LinearRegression;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const FIT_COLOR: RGBColor = BLUE;
const BIN_WIDTH_COLOR: RGBColor = BLACK;
const RMS_COLOR: RGBColor = RED;
const ERROR_COLOR: RGBColor = GREEN;

// Fraction of the data span added on each side of both axes
const AXIS_PADDING: f64 = 0.05;

/// A fully computed profile histogram chart, ready to draw
#[derive(Debug, Clone)]
pub struct ProfileFigure {
    centers: Vec<f64>,
    means: Vec<f64>,
    rms: Vec<f64>,
    errors: Vec<f64>,
    fit_values: Vec<f64>,
    half_bin_width: f64,
    fit: LinearRegression,
    labels: AxisLabels,
    options: RenderOptions,
}

impl ProfileFigure {
    /// Build a figure from a profile and the line fitted to its means
    ///
    /// Fails with `InsufficientData` when fewer than two bins survived.
    pub fn new(histogram: &ProfileHistogram, fit: LinearRegression) -> Result<Self> {
        let half_bin_width = histogram.half_bin_width()?;
        let centers = histogram.centers();
        let fit_values = fit.predict_all(&centers);
        Ok(Self {
            means: histogram.means(),
            rms: histogram.rms_values(),
            errors: histogram.errors(),
            centers,
            fit_values,
            half_bin_width,
            fit,
            labels: AxisLabels::default(),
            options: RenderOptions::default(),
        })
    }

    /// Sets axis labels and title
    pub fn with_labels(mut self, labels: AxisLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets image size, fonts and cap widths
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Axis labels and title
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    /// Rendering options in use
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The line fitted to the bin means
    pub fn fit(&self) -> &LinearRegression {
        &self.fit
    }

    /// Half-length of the horizontal bin-width bars
    pub fn half_bin_width(&self) -> f64 {
        self.half_bin_width
    }

    /// Cap widths in pixels for the bin-width, rms and error bars
    ///
    /// The bin-width and rms bars share the full cap; the error bars use half.
    pub fn cap_widths(&self) -> (u32, u32, u32) {
        let cap = self.options.cap_size;
        (cap, cap, cap / 2)
    }

    /// Points on the fitted line, one per surviving bin center
    pub fn fit_points(&self) -> Vec<(f64, f64)> {
        self.centers
            .iter()
            .copied()
            .zip(self.fit_values.iter().copied())
            .collect()
    }

    /// Legend corner, chosen from the sign of the correlation
    pub fn legend_position(&self) -> LegendPosition {
        LegendPosition::from_correlation(self.fit.r_value)
    }

    /// Legend labels in drawing order: fit, bin width, rms, error
    pub fn legend_entries(&self) -> [String; 4] {
        [
            format!("R: {:.2}", self.fit.r_value),
            "bin width".to_string(),
            "rms".to_string(),
            "error".to_string(),
        ]
    }

    /// Horizontal extent covering every bin-width bar
    pub fn x_range(&self) -> Range<f64> {
        let (lo, hi) = min_max(&self.centers).unwrap_or((0.0, 1.0));
        padded(lo - self.half_bin_width, hi + self.half_bin_width)
    }

    /// Vertical extent covering every rms bar and the fitted line
    pub fn y_range(&self) -> Range<f64> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (&mean, &rms) in self.means.iter().zip(&self.rms) {
            lo = lo.min(mean - rms);
            hi = hi.max(mean + rms);
        }
        for &value in &self.fit_values {
            lo = lo.min(value);
            hi = hi.max(value);
        }
        if lo > hi {
            return 0.0..1.0;
        }
        padded(lo, hi)
    }

    /// Draw the chart onto an existing drawing area
    ///
    /// The caller owns the backend and is responsible for `present()`.
    pub fn draw_on<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&WHITE).map_err(Error::render)?;

        let font = self.options.font_family.as_str();
        let label_size = self.options.font_size;
        let (width_cap, rms_cap, error_cap) = self.cap_widths();
        let marker = (width_cap / 2) as i32;
        let half = self.half_bin_width;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(self.options.margin)
            .x_label_area_size(label_size * 3)
            .y_label_area_size(label_size * 4);
        if self.options.draw_title {
            if let Some(title) = &self.labels.title {
                builder.caption(title, (font, label_size + 6));
            }
        }
        let mut chart = builder
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(Error::render)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .disable_y_mesh()
            .label_style((font, label_size));
        if let Some(label) = &self.labels.x {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &self.labels.y {
            mesh.y_desc(label.as_str());
        }
        mesh.draw().map_err(Error::render)?;

        let [fit_label, width_label, rms_label, error_label] = self.legend_entries();

        chart
            .draw_series(LineSeries::new(self.fit_points(), FIT_COLOR.stroke_width(2)))
            .map_err(Error::render)?
            .label(fit_label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FIT_COLOR));

        chart
            .draw_series(self.points().map(|(x, mean, _, _)| {
                ErrorBar::new_horizontal(
                    mean,
                    x - half,
                    x,
                    x + half,
                    BIN_WIDTH_COLOR.filled(),
                    width_cap,
                )
            }))
            .map_err(Error::render)?
            .label(width_label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BIN_WIDTH_COLOR));

        // "+" marker at each bin mean
        chart
            .draw_series(self.points().map(|(x, mean, _, _)| {
                EmptyElement::at((x, mean))
                    + PathElement::new(vec![(-marker, 0), (marker, 0)], BIN_WIDTH_COLOR)
                    + PathElement::new(vec![(0, -marker), (0, marker)], BIN_WIDTH_COLOR)
            }))
            .map_err(Error::render)?;

        chart
            .draw_series(self.points().map(|(x, mean, rms, _)| {
                ErrorBar::new_vertical(x, mean - rms, mean, mean + rms, RMS_COLOR.filled(), rms_cap)
            }))
            .map_err(Error::render)?
            .label(rms_label)
            .legend(|(x, y)| PathElement::new(vec![(x, y - 6), (x, y + 6)], RMS_COLOR));

        chart
            .draw_series(self.points().map(|(x, mean, _, error)| {
                ErrorBar::new_vertical(
                    x,
                    mean - error,
                    mean,
                    mean + error,
                    ERROR_COLOR.filled(),
                    error_cap,
                )
            }))
            .map_err(Error::render)?
            .label(error_label)
            .legend(|(x, y)| PathElement::new(vec![(x, y - 3), (x, y + 3)], ERROR_COLOR));

        chart
            .configure_series_labels()
            .position(self.legend_position().into())
            .label_font((font, self.options.legend_font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(Error::render)?;

        debug!(
            bins = self.centers.len(),
            legend = self.legend_position().as_str(),
            "drew profile figure"
        );
        Ok(())
    }

    /// Render to `path`, choosing the image format from its extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.save_as(path, ImageFormat::from_path(path)?)
    }

    /// Render to `path` in an explicit format
    pub fn save_as(&self, path: &Path, format: ImageFormat) -> Result<()> {
        let size = (self.options.width, self.options.height);
        match format {
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present().map_err(Error::render)?;
            }
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                self.draw_on(&root)?;
                root.present().map_err(Error::render)?;
            }
        }
        Ok(())
    }

    /// Render to an SVG document in memory
    pub fn to_svg_string(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.options.width, self.options.height))
                .into_drawing_area();
            self.draw_on(&root)?;
            root.present().map_err(Error::render)?;
        }
        Ok(svg)
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.centers
            .iter()
            .zip(&self.means)
            .zip(self.rms.iter().zip(&self.errors))
            .map(|((&x, &mean), (&rms, &error))| (x, mean, rms, error))
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * AXIS_PADDING
    } else {
        (lo.abs() * AXIS_PADDING).max(1.0)
    };
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use profile_histogram::{BinRule, ProfileBuilder};
    use profile_regression::linregress;

    fn figure(x: &[f64], y: &[f64], bins: usize) -> ProfileFigure {
        let hist = ProfileBuilder::new(BinRule::Count(bins)).build(x, y).unwrap();
        let fit = linregress(&hist.centers(), &hist.means()).unwrap();
        ProfileFigure::new(&hist, fit).unwrap()
    }

    fn rising() -> ProfileFigure {
        figure(
            &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            3,
        )
    }

    #[test]
    fn test_legend_for_rising_trend() {
        let fig = rising();
        assert_eq!(fig.legend_position(), LegendPosition::LowerRight);
        assert_eq!(
            fig.legend_entries(),
            [
                "R: 1.00".to_string(),
                "bin width".to_string(),
                "rms".to_string(),
                "error".to_string()
            ]
        );
    }

    #[test]
    fn test_legend_for_falling_trend() {
        let fig = figure(
            &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0],
            &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            3,
        );
        assert_eq!(fig.legend_position(), LegendPosition::UpperRight);
        assert_eq!(fig.legend_entries()[0], "R: -1.00");
    }

    #[test]
    fn test_fit_points_follow_line() {
        let fig = rising();
        let points = fig.fit_points();
        assert_eq!(points.len(), 3);
        for (x, y) in points {
            assert_abs_diff_eq!(y, 4.5 * x - 4.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(fig.half_bin_width(), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bin_width_bars_use_full_cap() {
        let fig = rising();
        assert_eq!(fig.cap_widths(), (8, 8, 4));
        let fig = fig.with_options(RenderOptions::default().cap_size(6));
        assert_eq!(fig.cap_widths(), (6, 6, 3));
    }

    #[test]
    fn test_labels_and_options_are_kept() {
        let fig = rising()
            .with_labels(AxisLabels::new().x("mass").title("run 7"))
            .with_options(RenderOptions::default().size(320, 240));
        assert_eq!(fig.labels().x.as_deref(), Some("mass"));
        assert_eq!(fig.labels().y, None);
        assert_eq!(fig.labels().title.as_deref(), Some("run 7"));
        assert_eq!((fig.options().width, fig.options().height), (320, 240));
        assert!(fig.fit().slope > 0.0);
    }

    #[test]
    fn test_ranges_cover_bars() {
        let fig = rising();
        let x = fig.x_range();
        assert!(x.start < 1.0 && x.end > 3.0);
        let rms = (2.0f64 / 3.0).sqrt();
        let y = fig.y_range();
        assert!(y.start < 2.0 - rms && y.end > 8.0 + rms);
    }

    #[test]
    fn test_single_bin_cannot_form_figure() {
        let hist = ProfileBuilder::new(BinRule::Count(1))
            .build(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0])
            .unwrap();
        let fit = linregress(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        assert!(ProfileFigure::new(&hist, fit).unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_padding_of_flat_range() {
        let range = padded(5.0, 5.0);
        assert!(range.start < 5.0 && range.end > 5.0);
    }
}
