use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::ChartViewConfig;
use crate::core::{
    ChartGeometry, ChartKind, DataShapeOutcome, DataSummary, DisplayMode, Record, build_geometry,
    inspect,
};
use crate::error::ChartResult;

/// Why a chart degraded to the summary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "message", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Classification or geometry construction failed.
    Geometry(String),
    /// The rendering backend rejected the chart frame.
    Backend(String),
}

impl FallbackReason {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Geometry(message) | Self::Backend(message) => message,
        }
    }
}

/// A successfully classified and laid-out chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedChart {
    pub kind: ChartKind,
    /// Name of the classification rule that fired, if any.
    pub rule: Option<String>,
    pub mode: DisplayMode,
    pub geometry: ChartGeometry,
    pub summary: DataSummary,
}

/// Typed result of the inspect → classify → build pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartPlan {
    NoData,
    Chart(Box<PlannedChart>),
    Fallback {
        reason: FallbackReason,
        summary: DataSummary,
    },
}

impl ChartPlan {
    #[must_use]
    pub fn kind(&self) -> Option<ChartKind> {
        match self {
            Self::Chart(chart) => Some(chart.kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&ChartGeometry> {
        match self {
            Self::Chart(chart) => Some(&chart.geometry),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Plans a chart for `records` at the scale of `mode`.
///
/// Pure: nothing is drawn. Empty input short-circuits to `NoData` before any
/// builder runs; any classification or geometry error becomes `Fallback`.
#[must_use]
pub fn plan_chart(records: &[Record], mode: DisplayMode, config: &ChartViewConfig) -> ChartPlan {
    let DataShapeOutcome::Shape(shape) = inspect(records) else {
        debug!(rows = records.len(), "no chartable data");
        return ChartPlan::NoData;
    };

    let summary = DataSummary::from_records(records);
    let classification = config.rules.classify_with_rule(records, &shape);
    let built: ChartResult<ChartGeometry> = config.style.resolve_palette().and_then(|palette| {
        build_geometry(
            classification.kind,
            records,
            &shape,
            config.layout(mode),
            &palette,
            config.locale,
        )
    });

    match built {
        Ok(geometry) => {
            debug!(
                kind = classification.kind.as_str(),
                ?mode,
                marks = geometry.mark_count(),
                "planned chart"
            );
            ChartPlan::Chart(Box::new(PlannedChart {
                kind: classification.kind,
                rule: classification.rule,
                mode,
                geometry,
                summary,
            }))
        }
        Err(e) => {
            warn!(
                kind = classification.kind.as_str(),
                ?mode,
                error = %e,
                "chart geometry failed; using summary fallback"
            );
            ChartPlan::Fallback {
                reason: FallbackReason::Geometry(e.to_string()),
                summary,
            }
        }
    }
}
