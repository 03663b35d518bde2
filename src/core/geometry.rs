use serde::{Deserialize, Serialize};

use crate::core::format::NumberLocale;
use crate::core::{
    BarChartGeometry, ChartKind, ChartLayout, DataShape, LineChartGeometry, Palette,
    PieChartGeometry, Record, build_bar_chart, build_line_chart, build_pie_chart,
};
use crate::error::ChartResult;

/// Geometry for one chart kind, ready for a frame builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartGeometry {
    Line(LineChartGeometry),
    Pie(PieChartGeometry),
    Bar(BarChartGeometry),
}

impl ChartGeometry {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
            Self::Bar(_) => ChartKind::Bar,
        }
    }

    /// Number of drawn marks (points, slices or bars).
    #[must_use]
    pub fn mark_count(&self) -> usize {
        match self {
            Self::Line(line) => line.points.len(),
            Self::Pie(pie) => pie.slices.len(),
            Self::Bar(bar) => bar.bars.len(),
        }
    }
}

/// Dispatches to the builder matching `kind`.
pub fn build_geometry(
    kind: ChartKind,
    records: &[Record],
    shape: &DataShape,
    layout: &ChartLayout,
    palette: &Palette,
    locale: NumberLocale,
) -> ChartResult<ChartGeometry> {
    Ok(match kind {
        ChartKind::Line => ChartGeometry::Line(build_line_chart(records, shape, layout, locale)?),
        ChartKind::Pie => {
            ChartGeometry::Pie(build_pie_chart(records, shape, layout, palette, locale)?)
        }
        ChartKind::Bar => ChartGeometry::Bar(build_bar_chart(records, shape, layout, locale)?),
    })
}
