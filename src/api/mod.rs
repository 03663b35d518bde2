mod chart_plan;
mod chart_view;
mod json_contract;
mod view_config;

pub use chart_plan::{ChartPlan, FallbackReason, PlannedChart, plan_chart};
pub use chart_view::{ChartView, CloseCallback, RenderOutcome};
pub use json_contract::{CHART_PLAN_JSON_SCHEMA_V1, ChartPlanJsonContractV1};
pub use view_config::{ChartViewConfig, DEFAULT_FULLSCREEN_TITLE};
