use serde::{Deserialize, Serialize};

use crate::core::{DisplayMode, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel insets between the viewport edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Size-dependent limits and pixel metrics for one display mode.
///
/// `inline()` and `fullscreen()` carry the stock values; everything is
/// serde-configurable through `ChartViewConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub padding: Padding,
    pub font_size_px: f64,
    pub max_bars: usize,
    pub max_slices: usize,
    pub bar_label_max_chars: usize,
    /// Bar labels rotate once the row count exceeds this.
    pub bar_label_rotate_after: usize,
    pub bar_gap_percent: f64,
    pub min_bar_width_percent: f64,
    pub min_bar_height_fraction: f64,
    /// Share of the plot height the tallest bar may occupy.
    pub bar_headroom_ratio: f64,
    pub pie_radius: f64,
    pub pie_stroke_width: f64,
    pub pie_ring_width: f64,
    pub legend_label_max_chars: Option<usize>,
    pub line_target_labels: usize,
    pub line_stroke_width: f64,
    pub line_marker_radius: f64,
}

impl ChartLayout {
    #[must_use]
    pub fn inline() -> Self {
        Self {
            viewport: Viewport::new(640, 256),
            padding: Padding::new(64.0, 16.0, 16.0, 48.0),
            font_size_px: 12.0,
            max_bars: 12,
            max_slices: 8,
            bar_label_max_chars: 12,
            bar_label_rotate_after: 6,
            bar_gap_percent: 2.0,
            min_bar_width_percent: 8.0,
            min_bar_height_fraction: 0.02,
            bar_headroom_ratio: 0.85,
            pie_radius: 70.0,
            pie_stroke_width: 12.0,
            pie_ring_width: 2.0,
            legend_label_max_chars: Some(20),
            line_target_labels: 6,
            line_stroke_width: 2.0,
            line_marker_radius: 3.0,
        }
    }

    #[must_use]
    pub fn fullscreen() -> Self {
        Self {
            viewport: Viewport::new(1152, 384),
            padding: Padding::new(80.0, 16.0, 16.0, 64.0),
            font_size_px: 14.0,
            max_bars: 20,
            max_slices: 12,
            bar_label_max_chars: 20,
            bar_label_rotate_after: 8,
            bar_gap_percent: 1.0,
            min_bar_width_percent: 5.0,
            min_bar_height_fraction: 0.02,
            bar_headroom_ratio: 0.85,
            pie_radius: 120.0,
            pie_stroke_width: 20.0,
            pie_ring_width: 3.0,
            legend_label_max_chars: None,
            line_target_labels: 6,
            line_stroke_width: 3.0,
            line_marker_radius: 4.0,
        }
    }

    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Inline => Self::inline(),
            DisplayMode::Fullscreen => Self::fullscreen(),
        }
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.padding.left,
            top: self.padding.top,
            width: f64::from(self.viewport.width) - self.padding.left - self.padding.right,
            height: f64::from(self.viewport.height) - self.padding.top - self.padding.bottom,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let padding = self.padding;
        for (name, value) in [
            ("padding.left", padding.left),
            ("padding.right", padding.right),
            ("padding.top", padding.top),
            ("padding.bottom", padding.bottom),
            ("bar_gap_percent", self.bar_gap_percent),
            ("min_bar_width_percent", self.min_bar_width_percent),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("pie_radius", self.pie_radius),
            ("pie_stroke_width", self.pie_stroke_width),
            ("pie_ring_width", self.pie_ring_width),
            ("line_stroke_width", self.line_stroke_width),
            ("line_marker_radius", self.line_marker_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("min_bar_height_fraction", self.min_bar_height_fraction),
            ("bar_headroom_ratio", self.bar_headroom_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be in (0, 1]"
                )));
            }
        }

        if self.max_bars == 0 || self.max_slices == 0 || self.line_target_labels == 0 {
            return Err(ChartError::InvalidConfig(
                "max_bars, max_slices and line_target_labels must be > 0".to_owned(),
            ));
        }

        let plot = self.plot_area();
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "padding leaves no plot area inside {}x{} viewport",
                self.viewport.width, self.viewport.height
            )));
        }

        Ok(())
    }
}
