use chrono::{DateTime, NaiveDateTime};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::format::{NumberLocale, format_value, truncate_label};
use crate::core::{ChartLayout, DataShape, LinearScale, PlotArea, Record};
use crate::error::ChartResult;

/// Fractions of the value range that receive a grid line, bottom to top.
pub const GRID_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Horizontal grid line with its value-axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub fraction: f64,
    pub y: f64,
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartGeometry {
    pub points: Vec<LinePoint>,
    pub grid: SmallVec<[GridLine; 5]>,
    pub x_labels: Vec<XAxisLabel>,
    pub min_value: f64,
    pub max_value: f64,
    /// Every `label_step`-th point carries an x-axis label.
    pub label_step: usize,
    pub plot: PlotArea,
}

/// Maps every row to a pixel point inside the layout's plot area.
///
/// X is spaced evenly by row index; y is linear between the observed min and
/// max (a flat series uses a span of 1 and sits on the bottom grid line).
pub fn build_line_chart(
    records: &[Record],
    shape: &DataShape,
    layout: &ChartLayout,
    locale: NumberLocale,
) -> ChartResult<LineChartGeometry> {
    layout.validate()?;

    let plot = layout.plot_area();
    let datums = shape.datums(records);
    let min_value = datums
        .iter()
        .map(|datum| OrderedFloat(datum.value))
        .min()
        .map_or(0.0, |min| min.0);
    let max_value = datums
        .iter()
        .map(|datum| OrderedFloat(datum.value))
        .max()
        .map_or(0.0, |max| max.0);
    let y_scale = LinearScale::from_extent(min_value, max_value)?;
    let x_scale = if datums.len() > 1 {
        Some(LinearScale::new(0.0, (datums.len() - 1) as f64)?)
    } else {
        None
    };

    let mut points = Vec::with_capacity(datums.len());
    for (index, datum) in datums.into_iter().enumerate() {
        let x = match x_scale {
            Some(scale) => scale.map(index as f64, plot.left, plot.right())?,
            None => plot.center_x(),
        };
        let y = y_scale.map(datum.value, plot.bottom(), plot.top)?;
        points.push(LinePoint {
            index,
            x,
            y,
            value: datum.value,
            label: datum.label,
        });
    }

    let mut grid = SmallVec::new();
    for fraction in GRID_FRACTIONS {
        let value = y_scale.value_at(fraction);
        grid.push(GridLine {
            fraction,
            y: plot.bottom() - plot.height * fraction,
            value,
            text: format_value(value, locale),
        });
    }

    let label_step = points.len().div_ceil(layout.line_target_labels).max(1);
    let x_labels = points
        .iter()
        .step_by(label_step)
        .map(|point| XAxisLabel {
            index: point.index,
            x: point.x,
            text: truncate_label(&short_date_label(&point.label), layout.bar_label_max_chars),
        })
        .collect();

    trace!(
        rows = records.len(),
        min_value,
        max_value,
        label_step,
        "built line geometry"
    );

    Ok(LineChartGeometry {
        points,
        grid,
        x_labels,
        min_value,
        max_value,
        label_step,
        plot,
    })
}

/// Shortens full timestamps (`2024-01-15T10:00:00Z`, `2024-01-15 10:00:00`) to
/// their calendar date; anything else is returned unchanged.
#[must_use]
pub fn short_date_label(label: &str) -> String {
    let trimmed = label.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return timestamp.date().format("%Y-%m-%d").to_string();
        }
    }
    label.to_owned()
}
