use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::format::{NumberLocale, format_value, truncate_label};
use crate::core::{ChartLayout, DataShape, Record};
use crate::error::ChartResult;

/// Fractions of the axis maximum labelled on the value axis, top to bottom.
pub const VALUE_AXIS_FRACTIONS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];

/// One bar, with heights and widths as fractions of the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub index: usize,
    /// Display label, truncated for the current layout.
    pub label: String,
    pub full_label: String,
    pub value: f64,
    pub value_text: String,
    pub height_fraction: f64,
    pub bar_width_fraction: f64,
}

/// Value-axis tick label at `fraction` of the axis maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub fraction: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartGeometry {
    pub bars: Vec<BarPrimitive>,
    /// Maximum over every row, including rows beyond the display cap.
    pub max_value: f64,
    pub min_value: f64,
    pub row_count: usize,
    pub rotate_labels: bool,
    pub value_axis: SmallVec<[AxisLabel; 5]>,
}

/// Builds bar geometry for the first `layout.max_bars` rows in input order.
///
/// Heights are `value / max` over all rows, floored at
/// `layout.min_bar_height_fraction` so zero and negative rows stay visible.
pub fn build_bar_chart(
    records: &[Record],
    shape: &DataShape,
    layout: &ChartLayout,
    locale: NumberLocale,
) -> ChartResult<BarChartGeometry> {
    layout.validate()?;

    let datums = shape.datums(records);
    let max_value = datums
        .iter()
        .map(|datum| OrderedFloat(datum.value))
        .max()
        .map_or(0.0, |max| max.0);
    let min_value = datums
        .iter()
        .map(|datum| OrderedFloat(datum.value))
        .min()
        .map_or(0.0, |min| min.0);

    let displayed = datums.len().min(layout.max_bars);
    let bar_width_fraction = if displayed == 0 {
        0.0
    } else {
        let percent = (100.0 / displayed as f64 - layout.bar_gap_percent)
            .max(layout.min_bar_width_percent);
        (percent / 100.0).min(1.0)
    };

    let floor = layout.min_bar_height_fraction;
    let bars: Vec<BarPrimitive> = datums
        .into_iter()
        .take(displayed)
        .enumerate()
        .map(|(index, datum)| {
            let height_fraction = if max_value > 0.0 {
                (datum.value / max_value).clamp(floor, 1.0)
            } else {
                floor
            };
            BarPrimitive {
                index,
                label: truncate_label(&datum.label, layout.bar_label_max_chars),
                value_text: format_value(datum.value, locale),
                full_label: datum.label,
                value: datum.value,
                height_fraction,
                bar_width_fraction,
            }
        })
        .collect();

    let value_axis = VALUE_AXIS_FRACTIONS
        .iter()
        .map(|&fraction| AxisLabel {
            fraction,
            text: if fraction == 0.0 {
                "0".to_owned()
            } else {
                format_value(max_value * fraction, locale)
            },
        })
        .collect();

    trace!(
        rows = records.len(),
        displayed,
        max_value,
        bar_width_fraction,
        "built bar geometry"
    );

    Ok(BarChartGeometry {
        bars,
        max_value,
        min_value,
        row_count: records.len(),
        rotate_labels: records.len() > layout.bar_label_rotate_after,
        value_axis,
    })
}
