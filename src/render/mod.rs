mod frame;
mod frame_builder;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use frame_builder::{
    EMPTY_STATE_MESSAGE, FALLBACK_HEADING, FrameDecorations, build_chart_frame,
    build_empty_frame, build_fallback_frame,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_renderer::{SvgRenderer, frame_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from classification and geometry logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
