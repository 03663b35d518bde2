//! genbi-charts: automatic chart selection and geometry for BI query results.
//!
//! Query-result rows flow through a fixed pipeline: the inspector picks the
//! category and value columns, an ordered rule list classifies the data as a
//! line, pie or bar chart, a pure builder lays out renderer-agnostic geometry,
//! and a [`render::Renderer`] backend draws the resulting frame.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartPlan, ChartView, ChartViewConfig, RenderOutcome, plan_chart};
pub use error::{ChartError, ChartResult};
