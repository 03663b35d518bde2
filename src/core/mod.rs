pub mod bar_chart;
pub mod classifier;
pub mod format;
pub mod geometry;
pub mod inspector;
pub mod layout;
pub mod line_chart;
pub mod pie_chart;
pub mod record;
pub mod scale;
pub mod style;
pub mod types;

pub use bar_chart::{AxisLabel, BarChartGeometry, BarPrimitive, build_bar_chart};
pub use classifier::{
    ChartClassifier, ChartKind, Classification, ClassificationRule, RulePredicate, default_rules,
    is_date_like,
};
pub use format::NumberLocale;
pub use geometry::{ChartGeometry, build_geometry};
pub use inspector::{ChartDatum, DataShape, DataShapeOutcome, DataSummary, UNKNOWN_LABEL, inspect};
pub use layout::{ChartLayout, Padding};
pub use line_chart::{GridLine, LineChartGeometry, LinePoint, XAxisLabel, build_line_chart};
pub use pie_chart::{PieChartGeometry, PieSlice, build_pie_chart};
pub use record::{Record, RecordSet, Scalar};
pub use scale::LinearScale;
pub use style::{ChartStyle, DEFAULT_PALETTE, Palette, Theme, ThemeColors};
pub use types::{DisplayMode, PlotArea, Viewport};
