use std::f64::consts::TAU;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::format::{NumberLocale, format_grouped, format_percent, truncate_label};
use crate::core::{ChartLayout, DataShape, Palette, Record};
use crate::error::ChartResult;
use crate::render::Color;

/// One pie slice laid out as a stroke dash along the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    /// Legend label, truncated for the current layout.
    pub label: String,
    pub full_label: String,
    pub value: f64,
    pub value_text: String,
    pub percent_text: String,
    /// Sum of the sweeps of every earlier slice.
    pub start_angle_fraction: f64,
    pub sweep_fraction: f64,
    pub arc_length: f64,
    /// Negated arc length consumed by earlier slices.
    pub arc_offset: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartGeometry {
    pub slices: Vec<PieSlice>,
    /// Sum of the displayed non-negative slice values; `inf` once that sum
    /// leaves the `f64` range, while the sweeps stay exact.
    pub total: f64,
    pub radius: f64,
    pub circumference: f64,
    pub row_count: usize,
}

/// Builds pie geometry for the first `layout.max_slices` rows.
///
/// Slices keep input order so repeated renders are stable. Negative values
/// count as 0 for the sweep but keep their raw value in the legend; a zero
/// total leaves every arc empty.
pub fn build_pie_chart(
    records: &[Record],
    shape: &DataShape,
    layout: &ChartLayout,
    palette: &Palette,
    locale: NumberLocale,
) -> ChartResult<PieChartGeometry> {
    layout.validate()?;

    let datums: Vec<_> = records
        .iter()
        .take(layout.max_slices)
        .map(|record| shape.datum(record))
        .collect();
    // Relative to the largest slice; a plain sum can overflow to inf.
    let largest = datums
        .iter()
        .map(|datum| OrderedFloat(datum.value.max(0.0)))
        .max()
        .map_or(0.0, |max| max.0);
    let ratio = |value: f64| {
        if largest > 0.0 {
            value.max(0.0) / largest
        } else {
            0.0
        }
    };
    let ratio_sum: f64 = datums.iter().map(|datum| ratio(datum.value)).sum();
    let total: f64 = datums.iter().map(|datum| datum.value.max(0.0)).sum();
    let radius = layout.pie_radius;
    let circumference = TAU * radius;

    let mut cumulative = 0.0;
    let slices: Vec<PieSlice> = datums
        .into_iter()
        .enumerate()
        .map(|(index, datum)| {
            let sweep_fraction = if ratio_sum > 0.0 {
                ratio(datum.value) / ratio_sum
            } else {
                0.0
            };
            let start_angle_fraction = cumulative;
            cumulative += sweep_fraction;

            let label = match layout.legend_label_max_chars {
                Some(max_chars) => truncate_label(&datum.label, max_chars),
                None => datum.label.clone(),
            };
            let percent_text = if ratio_sum > 0.0 {
                format_percent(sweep_fraction)
            } else {
                "0%".to_owned()
            };

            PieSlice {
                index,
                label,
                full_label: datum.label,
                value: datum.value,
                value_text: format_grouped(datum.value, locale),
                percent_text,
                start_angle_fraction,
                sweep_fraction,
                arc_length: sweep_fraction * circumference,
                arc_offset: -start_angle_fraction * circumference,
                color: palette.color(index),
            }
        })
        .collect();

    trace!(
        rows = records.len(),
        slices = slices.len(),
        total,
        "built pie geometry"
    );

    Ok(PieChartGeometry {
        slices,
        total,
        radius,
        circumference,
        row_count: records.len(),
    })
}
