//! Rendering configuration

use plotters::chart::SeriesLabelPosition;
use serde::{Deserialize, Serialize};

/// Where the legend box is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    LowerRight,
    UpperRight,
}

impl LegendPosition {
    /// Lower right for a rising (or flat) trend, upper right for a falling one
    ///
    /// Keeps the legend away from the data in the common case.
    pub fn from_correlation(r_value: f64) -> Self {
        if r_value < 0.0 {
            LegendPosition::UpperRight
        } else {
            LegendPosition::LowerRight
        }
    }

    /// Name used in legend-location vocabularies ("lower right", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::LowerRight => "lower right",
            LegendPosition::UpperRight => "upper right",
        }
    }
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        }
    }
}

/// Axis labels and title for a figure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: Option<String>,
    pub y: Option<String>,
    /// Accepted for every figure but only drawn when
    /// [`RenderOptions::draw_title`] is set
    pub title: Option<String>,
}

impl AxisLabels {
    /// No labels and no title
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the x axis label
    pub fn x(mut self, label: impl Into<String>) -> Self {
        self.x = Some(label.into());
        self
    }

    /// Sets the y axis label
    pub fn y(mut self, label: impl Into<String>) -> Self {
        self.y = Some(label.into());
        self
    }

    /// Sets the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Image size, fonts and error-bar geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Cap width of the rms bars in pixels; the error bars use half
    pub cap_size: u32,
    /// Outer margin in pixels
    pub margin: u32,
    pub font_family: String,
    pub font_size: u32,
    pub legend_font_size: u32,
    /// Draw the title caption (off by default)
    pub draw_title: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            cap_size: 8,
            margin: 20,
            font_family: "sans-serif".to_string(),
            font_size: 16,
            legend_font_size: 13,
            draw_title: false,
        }
    }
}

impl RenderOptions {
    /// Set the image size in pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the rms cap width in pixels
    pub fn cap_size(mut self, cap_size: u32) -> Self {
        self.cap_size = cap_size;
        self
    }

    /// Set the font family used for all text
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the axis label and legend font sizes
    pub fn font_sizes(mut self, labels: u32, legend: u32) -> Self {
        self.font_size = labels;
        self.legend_font_size = legend;
        self
    }

    /// Draw the title as a caption above the chart
    pub fn draw_title(mut self, draw: bool) -> Self {
        self.draw_title = draw;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_position_follows_sign() {
        assert_eq!(LegendPosition::from_correlation(0.8), LegendPosition::LowerRight);
        assert_eq!(LegendPosition::from_correlation(0.0), LegendPosition::LowerRight);
        assert_eq!(LegendPosition::from_correlation(-0.01), LegendPosition::UpperRight);
        assert_eq!(LegendPosition::LowerRight.as_str(), "lower right");
        assert_eq!(LegendPosition::UpperRight.as_str(), "upper right");
    }

    #[test]
    fn test_render_options_builders() {
        let options = RenderOptions::default()
            .size(800, 0)
            .cap_size(6)
            .font_sizes(12, 10)
            .draw_title(true);
        assert_eq!((options.width, options.height), (800, 1));
        assert_eq!(options.cap_size, 6);
        assert_eq!(options.legend_font_size, 10);
        assert!(options.draw_title);
        assert!(!RenderOptions::default().draw_title);
    }

    #[test]
    fn test_axis_labels() {
        let labels = AxisLabels::new().x("mass").y("energy").title("run 7");
        assert_eq!(labels.x.as_deref(), Some("mass"));
        assert_eq!(labels.y.as_deref(), Some("energy"));
        assert_eq!(labels.title.as_deref(), Some("run 7"));
    }
}
