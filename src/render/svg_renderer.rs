use tracing::trace;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Serializes frames into standalone SVG documents.
///
/// Pie arcs are emitted as dashed `<circle>` strokes rotated to start at
/// 12 o'clock, so slice geometry maps onto `stroke-dasharray` directly.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent successful `render` call.
    #[must_use]
    pub fn last_svg(&self) -> Option<&str> {
        self.last_svg.as_deref()
    }

    #[must_use]
    pub fn into_last_svg(self) -> Option<String> {
        self.last_svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let svg = frame_to_svg(frame);
        trace!(bytes = svg.len(), "rendered svg frame");
        self.last_svg = Some(svg);
        Ok(())
    }
}

/// Writes `frame` as an SVG document sized to its viewport.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    ));
    out.push('\n');

    for rect in &frame.rects {
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
        ));
        if rect.corner_radius > 0.0 {
            out.push_str(&format!(r#" rx="{}""#, num(rect.corner_radius)));
        }
        write_paint_attr(&mut out, "fill", rect.fill);
        out.push_str("/>\n");
    }

    for line in &frame.lines {
        out.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            num(line.stroke_width),
        ));
        write_paint_attr(&mut out, "stroke", line.color);
        out.push_str("/>\n");
    }

    for arc in &frame.arcs {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke-width="{}" stroke-dasharray="{} {}" stroke-dashoffset="{}" transform="rotate(-90 {} {})""#,
            num(arc.cx),
            num(arc.cy),
            num(arc.radius),
            num(arc.stroke_width),
            num(arc.dash_length),
            num(arc.circumference()),
            num(arc.dash_offset),
            num(arc.cx),
            num(arc.cy),
        ));
        write_paint_attr(&mut out, "stroke", arc.color);
        out.push_str("/>\n");
    }

    for polyline in &frame.polylines {
        let points: Vec<String> = polyline
            .points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect();
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke-width="{}" stroke-linejoin="round""#,
            points.join(" "),
            num(polyline.stroke_width),
        ));
        write_paint_attr(&mut out, "stroke", polyline.color);
        out.push_str("/>\n");
    }

    for circle in &frame.circles {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
        ));
        write_paint_attr(&mut out, "fill", circle.fill);
        out.push_str("/>\n");
    }

    for text in &frame.texts {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
        ));
        if text.rotation_deg != 0.0 {
            out.push_str(&format!(
                r#" transform="rotate({} {} {})""#,
                num(text.rotation_deg),
                num(text.x),
                num(text.y)
            ));
        }
        out.push_str(match text.h_align {
            TextHAlign::Left => r#" text-anchor="start""#,
            TextHAlign::Center => r#" text-anchor="middle""#,
            TextHAlign::Right => r#" text-anchor="end""#,
        });
        write_paint_attr(&mut out, "fill", text.color);
        out.push('>');
        out.push_str(&escape_xml(&text.text));
        out.push_str("</text>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn write_paint_attr(out: &mut String, attr: &str, color: Color) {
    out.push_str(&format!(r#" {attr}="{}""#, color.to_hex()));
    if color.alpha < 1.0 {
        out.push_str(&format!(r#" {attr}-opacity="{}""#, num(color.alpha)));
    }
}

/// Two-decimal coordinates with trailing zeros trimmed.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" || text.is_empty() {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Not allowed anywhere in XML 1.0.
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' => {}
            _ => out.push(ch),
        }
    }
    out
}
