use crate::core::format::truncate_label;
use crate::core::{
    BarChartGeometry, ChartGeometry, ChartLayout, DataSummary, LineChartGeometry,
    PieChartGeometry, ThemeColors,
};
use crate::render::{
    ArcPrimitive, CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

const AXIS_LABEL_GAP_PX: f64 = 8.0;
const BAR_CORNER_RADIUS_PX: f64 = 2.0;
const LABEL_ROTATION_DEG: f64 = -45.0;
const MAX_COLUMNS_LINE_CHARS: usize = 80;

pub const EMPTY_STATE_MESSAGE: &str = "No data available for visualization";
pub const FALLBACK_HEADING: &str = "Chart Rendering";

/// Text drawn around the plot: optional title (top-left) and footer (bottom-centre).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDecorations {
    pub title: Option<String>,
    pub footer: Option<String>,
}

/// Lays out chart geometry plus decorations as a frame for `layout.viewport`.
#[must_use]
pub fn build_chart_frame(
    geometry: &ChartGeometry,
    layout: &ChartLayout,
    colors: ThemeColors,
    decorations: &FrameDecorations,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);
    match geometry {
        ChartGeometry::Bar(bar) => push_bar_marks(&mut frame, bar, layout, colors),
        ChartGeometry::Pie(pie) => push_pie_marks(&mut frame, pie, layout, colors),
        ChartGeometry::Line(line) => push_line_marks(&mut frame, line, layout, colors),
    }

    let font = layout.font_size_px;
    frame.texts.push(TextPrimitive::new(
        geometry.kind().as_str(),
        f64::from(layout.viewport.width) - AXIS_LABEL_GAP_PX,
        font,
        font * 0.85,
        colors.muted_text,
        TextHAlign::Right,
    ));
    push_decorations(&mut frame, layout, colors, decorations);
    frame
}

/// Frame shown when there is nothing to chart; no geometry is involved.
#[must_use]
pub fn build_empty_frame(layout: &ChartLayout, colors: ThemeColors) -> RenderFrame {
    let viewport = layout.viewport;
    RenderFrame::new(viewport).with_text(TextPrimitive::new(
        EMPTY_STATE_MESSAGE,
        f64::from(viewport.width) * 0.5,
        f64::from(viewport.height) * 0.5,
        layout.font_size_px,
        colors.muted_text,
        TextHAlign::Center,
    ))
}

/// Geometry-free summary frame used when a chart could not be built or drawn.
#[must_use]
pub fn build_fallback_frame(
    layout: &ChartLayout,
    colors: ThemeColors,
    summary: &DataSummary,
) -> RenderFrame {
    let viewport = layout.viewport;
    let font = layout.font_size_px;
    let center_x = f64::from(viewport.width) * 0.5;
    let center_y = f64::from(viewport.height) * 0.5;

    RenderFrame::new(viewport)
        .with_text(TextPrimitive::new(
            FALLBACK_HEADING,
            center_x,
            center_y - font * 2.0,
            font * 1.3,
            colors.text,
            TextHAlign::Center,
        ))
        .with_text(TextPrimitive::new(
            format!(
                "Found {} records with {} columns",
                summary.record_count, summary.column_count
            ),
            center_x,
            center_y,
            font,
            colors.muted_text,
            TextHAlign::Center,
        ))
        .with_text(TextPrimitive::new(
            truncate_label(&summary.columns_line(), MAX_COLUMNS_LINE_CHARS),
            center_x,
            center_y + font * 2.0,
            font * 0.85,
            colors.muted_text,
            TextHAlign::Center,
        ))
}

fn push_decorations(
    frame: &mut RenderFrame,
    layout: &ChartLayout,
    colors: ThemeColors,
    decorations: &FrameDecorations,
) {
    let font = layout.font_size_px;
    if let Some(title) = decorations.title.as_deref().filter(|title| !title.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            title,
            AXIS_LABEL_GAP_PX,
            font,
            font * 1.15,
            colors.text,
            TextHAlign::Left,
        ));
    }
    if let Some(footer) = decorations.footer.as_deref().filter(|footer| !footer.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            footer,
            f64::from(layout.viewport.width) * 0.5,
            f64::from(layout.viewport.height) - font * 0.6,
            font * 0.85,
            colors.muted_text,
            TextHAlign::Center,
        ));
    }
}

fn push_bar_marks(
    frame: &mut RenderFrame,
    bar: &BarChartGeometry,
    layout: &ChartLayout,
    colors: ThemeColors,
) {
    let plot = layout.plot_area();
    let font = layout.font_size_px;
    let usable_height = plot.height * layout.bar_headroom_ratio;

    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        1.0,
        colors.grid,
    ));
    for label in &bar.value_axis {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            plot.left - AXIS_LABEL_GAP_PX,
            plot.bottom() - usable_height * label.fraction,
            font,
            colors.muted_text,
            TextHAlign::Right,
        ));
    }

    if bar.bars.is_empty() {
        return;
    }
    let slot_width = plot.width / bar.bars.len() as f64;
    for item in &bar.bars {
        let width = (item.bar_width_fraction * plot.width).min(slot_width);
        let height = item.height_fraction * usable_height;
        let center_x = plot.left + slot_width * (item.index as f64 + 0.5);
        frame.rects.push(
            RectPrimitive::new(
                center_x - width * 0.5,
                plot.bottom() - height,
                width,
                height,
                colors.bar,
            )
            .with_corner_radius(BAR_CORNER_RADIUS_PX),
        );

        let label = TextPrimitive::new(
            item.label.clone(),
            center_x,
            plot.bottom() + font,
            font,
            colors.text,
            if bar.rotate_labels {
                TextHAlign::Right
            } else {
                TextHAlign::Center
            },
        );
        frame.texts.push(if bar.rotate_labels {
            label.with_rotation(LABEL_ROTATION_DEG)
        } else {
            label
        });
    }
}

fn push_pie_marks(
    frame: &mut RenderFrame,
    pie: &PieChartGeometry,
    layout: &ChartLayout,
    colors: ThemeColors,
) {
    let plot = layout.plot_area();
    let font = layout.font_size_px;
    let cx = plot.left + pie.radius + layout.pie_stroke_width * 0.5;
    let cy = f64::from(layout.viewport.height) * 0.5;

    frame.arcs.push(ArcPrimitive {
        cx,
        cy,
        radius: pie.radius,
        stroke_width: layout.pie_ring_width,
        dash_length: pie.circumference,
        dash_offset: 0.0,
        color: colors.ring,
    });
    for slice in &pie.slices {
        frame.arcs.push(ArcPrimitive {
            cx,
            cy,
            radius: pie.radius,
            stroke_width: layout.pie_stroke_width,
            dash_length: slice.arc_length,
            dash_offset: slice.arc_offset,
            color: slice.color,
        });
    }

    if pie.slices.is_empty() {
        return;
    }
    let legend_x = cx + pie.radius + layout.pie_stroke_width + font * 2.5;
    let row_spacing = (font * 2.6).min(plot.height / pie.slices.len() as f64);
    let first_row_y = cy - row_spacing * (pie.slices.len() - 1) as f64 * 0.5;
    for slice in &pie.slices {
        let row_y = first_row_y + row_spacing * slice.index as f64;
        frame.circles.push(CirclePrimitive::new(
            legend_x,
            row_y,
            font * 0.5,
            slice.color,
        ));
        frame.texts.push(TextPrimitive::new(
            slice.label.clone(),
            legend_x + font,
            row_y - font * 0.5,
            font,
            colors.text,
            TextHAlign::Left,
        ));
        frame.texts.push(TextPrimitive::new(
            format!("{} ({})", slice.value_text, slice.percent_text),
            legend_x + font,
            row_y + font * 0.5,
            font * 0.85,
            colors.muted_text,
            TextHAlign::Left,
        ));
    }
}

fn push_line_marks(
    frame: &mut RenderFrame,
    line: &LineChartGeometry,
    layout: &ChartLayout,
    colors: ThemeColors,
) {
    let plot = line.plot;
    let font = layout.font_size_px;

    for grid in &line.grid {
        frame.lines.push(LinePrimitive::new(
            plot.left,
            grid.y,
            plot.right(),
            grid.y,
            1.0,
            colors.grid,
        ));
        frame.texts.push(TextPrimitive::new(
            grid.text.clone(),
            plot.left - AXIS_LABEL_GAP_PX,
            grid.y,
            font,
            colors.muted_text,
            TextHAlign::Right,
        ));
    }

    if line.points.len() > 1 {
        frame.polylines.push(PolylinePrimitive {
            points: line.points.iter().map(|point| (point.x, point.y)).collect(),
            stroke_width: layout.line_stroke_width,
            color: colors.line,
        });
    }
    for point in &line.points {
        frame.circles.push(CirclePrimitive::new(
            point.x,
            point.y,
            layout.line_marker_radius,
            colors.line,
        ));
    }
    for label in &line.x_labels {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            label.x,
            plot.bottom() + font,
            font,
            colors.text,
            TextHAlign::Center,
        ));
    }
}
