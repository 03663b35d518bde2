use tracing::warn;

use crate::api::{ChartPlan, ChartViewConfig, FallbackReason, plan_chart};
use crate::core::{ChartKind, DataSummary, DisplayMode, RecordSet};
use crate::error::ChartResult;
use crate::interaction::{CloseTrigger, DisplayState};
use crate::render::{
    FrameDecorations, Renderer, build_chart_frame, build_empty_frame, build_fallback_frame,
};

/// Invoked with the trigger whenever the fullscreen overlay is dismissed.
pub type CloseCallback = Box<dyn FnMut(CloseTrigger)>;

/// What the last `render` call put on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Empty-state frame; no geometry builder ran.
    Empty,
    Rendered { kind: ChartKind, mode: DisplayMode },
    Fallback {
        reason: FallbackReason,
        summary: DataSummary,
    },
}

/// Chart shell: owns the records, the inline/fullscreen state machine and a
/// rendering backend.
pub struct ChartView<R: Renderer> {
    renderer: R,
    config: ChartViewConfig,
    display: DisplayState,
    records: RecordSet,
    on_close: Option<CloseCallback>,
}

impl<R: Renderer> ChartView<R> {
    pub fn new(renderer: R, config: ChartViewConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            display: DisplayState::default(),
            records: RecordSet::default(),
            on_close: None,
        })
    }

    pub fn set_records(&mut self, records: impl Into<RecordSet>) {
        self.records = records.into();
    }

    #[must_use]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }

    pub fn set_on_close(&mut self, callback: impl FnMut(CloseTrigger) + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Enters fullscreen; returns `false` when already there.
    pub fn open_fullscreen(&mut self) -> bool {
        self.display.open_fullscreen()
    }

    /// Leaves fullscreen and notifies the close callback; returns `false`
    /// (without notifying) when already inline.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.display.close(trigger) {
            return false;
        }
        if let Some(callback) = self.on_close.as_mut() {
            callback(trigger);
        }
        true
    }

    /// Plans the current records for the current display mode without drawing.
    #[must_use]
    pub fn plan(&self) -> ChartPlan {
        plan_chart(self.records.records(), self.display.mode(), &self.config)
    }

    /// Draws the current records.
    ///
    /// Geometry or backend failures degrade to the summary frame. Only a
    /// backend failure on that summary frame (or the empty-state frame) is
    /// returned as an error.
    pub fn render(&mut self) -> ChartResult<RenderOutcome> {
        let mode = self.display.mode();
        let layout = self.config.layout(mode);
        let colors = self.config.style.theme.colors();

        match self.plan() {
            ChartPlan::NoData => {
                self.renderer.render(&build_empty_frame(layout, colors))?;
                Ok(RenderOutcome::Empty)
            }
            ChartPlan::Chart(chart) => {
                let decorations = FrameDecorations {
                    title: mode.is_fullscreen().then(|| self.config.title.clone()),
                    footer: self
                        .config
                        .show_summary
                        .then(|| chart.summary.summary_line()),
                };
                let frame = build_chart_frame(&chart.geometry, layout, colors, &decorations);
                match self.renderer.render(&frame) {
                    Ok(()) => Ok(RenderOutcome::Rendered {
                        kind: chart.kind,
                        mode,
                    }),
                    Err(e) => {
                        warn!(
                            kind = chart.kind.as_str(),
                            error = %e,
                            "renderer rejected chart frame; using summary fallback"
                        );
                        self.render_fallback(FallbackReason::Backend(e.to_string()), chart.summary)
                    }
                }
            }
            ChartPlan::Fallback { reason, summary } => self.render_fallback(reason, summary),
        }
    }

    fn render_fallback(
        &mut self,
        reason: FallbackReason,
        summary: DataSummary,
    ) -> ChartResult<RenderOutcome> {
        let layout = self.config.layout(self.display.mode());
        let colors = self.config.style.theme.colors();
        self.renderer
            .render(&build_fallback_frame(layout, colors, &summary))?;
        Ok(RenderOutcome::Fallback { reason, summary })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
