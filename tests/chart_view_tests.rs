mod support;

use std::cell::RefCell;
use std::rc::Rc;

use genbi_charts::api::{ChartPlan, ChartView, ChartViewConfig, FallbackReason, RenderOutcome};
use genbi_charts::core::{ChartKind, ChartStyle, DisplayMode, Record};
use genbi_charts::interaction::CloseTrigger;
use genbi_charts::plan_chart;
use genbi_charts::render::{
    EMPTY_STATE_MESSAGE, FALLBACK_HEADING, NullRenderer, RenderFrame, Renderer, SvgRenderer,
};
use genbi_charts::{ChartError, ChartResult};
use support::{numbered_records, pair_records};

/// Accepts text-only frames and rejects anything carrying chart marks.
#[derive(Default)]
struct MarkRejectingRenderer {
    rejected: usize,
    last_frame: Option<RenderFrame>,
}

impl Renderer for MarkRejectingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        if !frame.rects.is_empty() || !frame.arcs.is_empty() || !frame.polylines.is_empty() {
            self.rejected += 1;
            return Err(ChartError::InvalidData("marks not supported".to_owned()));
        }
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}

fn view() -> ChartView<NullRenderer> {
    ChartView::new(NullRenderer::default(), ChartViewConfig::default()).expect("view")
}

#[test]
fn empty_records_render_the_empty_state() {
    let mut view = view();

    let outcome = view.render().expect("render");

    assert_eq!(outcome, RenderOutcome::Empty);
    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.contains_text(EMPTY_STATE_MESSAGE));
    assert!(frame.rects.is_empty());
    assert!(frame.arcs.is_empty());
}

#[test]
fn records_without_columns_are_empty() {
    let plan = plan_chart(
        &[Record::new()],
        DisplayMode::Inline,
        &ChartViewConfig::default(),
    );
    assert_eq!(plan, ChartPlan::NoData);
}

#[test]
fn bar_scenario_renders_twelve_rects_inline() {
    let mut view = view();
    view.set_records(numbered_records("product", "revenue", 20));

    let outcome = view.render().expect("render");

    assert_eq!(
        outcome,
        RenderOutcome::Rendered {
            kind: ChartKind::Bar,
            mode: DisplayMode::Inline,
        }
    );
    assert_eq!(view.renderer().last_rect_count, 12);
}

#[test]
fn fullscreen_rebuilds_with_larger_caps_and_a_title() {
    let mut view = view();
    view.set_records(numbered_records("product", "revenue", 20));

    assert!(view.open_fullscreen());
    assert!(!view.open_fullscreen());
    let outcome = view.render().expect("render");

    assert_eq!(
        outcome,
        RenderOutcome::Rendered {
            kind: ChartKind::Bar,
            mode: DisplayMode::Fullscreen,
        }
    );
    assert_eq!(view.renderer().last_rect_count, 20);
    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.contains_text("Chart Visualization"));
    assert!(frame.contains_text("20 records \u{2022} 2 columns"));
}

#[test]
fn inline_frame_has_no_title() {
    let mut view = view();
    view.set_records(numbered_records("product", "revenue", 8));

    view.render().expect("render");

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(!frame.contains_text("Chart Visualization"));
}

#[test]
fn pie_scenario_renders_one_arc_per_slice_plus_ring() {
    let mut view = view();
    view.set_records(pair_records(
        "group",
        "share",
        vec![("Retail", 40), ("Wholesale", 35), ("Online", 25)],
    ));

    let outcome = view.render().expect("render");

    assert_eq!(
        outcome,
        RenderOutcome::Rendered {
            kind: ChartKind::Pie,
            mode: DisplayMode::Inline,
        }
    );
    assert_eq!(view.renderer().last_arc_count, 4);
    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.contains_text("40 (40.0%)"));
}

#[test]
fn close_notifies_once_per_real_transition() {
    let closes: Rc<RefCell<Vec<CloseTrigger>>> = Rc::default();
    let mut view = view();
    let sink = Rc::clone(&closes);
    view.set_on_close(move |trigger| sink.borrow_mut().push(trigger));

    assert!(!view.close(CloseTrigger::Overlay));
    assert!(closes.borrow().is_empty());

    assert!(view.open_fullscreen());
    assert_eq!(view.display_mode(), DisplayMode::Fullscreen);
    assert!(view.close(CloseTrigger::Overlay));
    assert_eq!(view.display_mode(), DisplayMode::Inline);

    assert!(view.open_fullscreen());
    assert!(view.close(CloseTrigger::CloseControl));
    assert!(!view.close(CloseTrigger::CloseControl));

    assert_eq!(
        *closes.borrow(),
        vec![CloseTrigger::Overlay, CloseTrigger::CloseControl]
    );
}

#[test]
fn backend_failure_degrades_to_summary() {
    let mut view =
        ChartView::new(MarkRejectingRenderer::default(), ChartViewConfig::default()).expect("view");
    view.set_records(numbered_records("product", "revenue", 9));

    let outcome = view.render().expect("render");

    let RenderOutcome::Fallback { reason, summary } = outcome else {
        panic!("expected fallback, got {outcome:?}");
    };
    assert!(matches!(reason, FallbackReason::Backend(_)));
    assert_eq!(summary.record_count, 9);
    assert_eq!(view.renderer().rejected, 1);

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.contains_text(FALLBACK_HEADING));
    assert!(frame.contains_text("Found 9 records with 2 columns"));
    assert!(frame.contains_text("Columns: product, revenue"));
}

#[test]
fn extreme_values_render_as_a_line_chart() {
    let mut view = view();
    view.set_records(pair_records(
        "date",
        "amount",
        vec![("2024-01-01", -1e308), ("2024-01-02", 1e308)],
    ));

    assert_eq!(view.plan().kind(), Some(ChartKind::Line));
    assert_eq!(
        view.render().expect("render"),
        RenderOutcome::Rendered {
            kind: ChartKind::Line,
            mode: DisplayMode::Inline,
        }
    );
}

#[test]
fn geometry_failure_plans_a_summary_fallback() {
    let mut config = ChartViewConfig::default();
    config.inline.max_bars = 0;

    let plan = plan_chart(
        &numbered_records("product", "revenue", 9),
        DisplayMode::Inline,
        &config,
    );

    let ChartPlan::Fallback { reason, summary } = plan else {
        panic!("expected fallback, got {plan:?}");
    };
    assert!(matches!(reason, FallbackReason::Geometry(_)));
    assert_eq!(summary.record_count, 9);
    assert_eq!(summary.columns, vec!["product".to_owned(), "revenue".to_owned()]);
}

#[test]
fn invalid_palette_is_rejected_by_the_view_and_falls_back_in_plans() {
    let config = ChartViewConfig::default().with_style(ChartStyle {
        palette: Some(vec!["teal".to_owned()]),
        ..ChartStyle::default()
    });

    assert!(matches!(
        ChartView::new(NullRenderer::default(), config.clone()),
        Err(ChartError::InvalidColor(_))
    ));

    let plan = plan_chart(
        &numbered_records("product", "revenue", 3),
        DisplayMode::Inline,
        &config,
    );
    assert!(plan.is_fallback());
}

#[test]
fn plan_matches_the_rendered_kind() {
    let mut view = view();
    view.set_records(pair_records(
        "month",
        "sales",
        vec![("2024-01", 100), ("2024-02", 150)],
    ));

    assert_eq!(view.plan().kind(), Some(ChartKind::Line));
    let outcome = view.render().expect("render");
    assert!(matches!(
        outcome,
        RenderOutcome::Rendered {
            kind: ChartKind::Line,
            ..
        }
    ));
}

#[test]
fn svg_backend_writes_a_document_per_render() {
    let mut view =
        ChartView::new(SvgRenderer::new(), ChartViewConfig::default()).expect("view");
    view.set_records(pair_records(
        "month",
        "sales",
        vec![("2024-01", 100), ("2024-02", 150), ("2024-03", 120)],
    ));

    view.render().expect("render");

    let svg = view.renderer().last_svg().expect("svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("2024-02"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn rendering_works_with_default_tracing_installed() {
    let installed = genbi_charts::telemetry::init_default_tracing();
    if !cfg!(feature = "telemetry") {
        assert!(!installed);
    }

    let mut view = view();
    view.set_records(numbered_records("region", "orders", 3));
    assert!(matches!(
        view.render().expect("render"),
        RenderOutcome::Rendered {
            kind: ChartKind::Pie,
            ..
        }
    ));
}
