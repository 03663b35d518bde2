use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartPlan, ChartView};

pub const CHART_PLAN_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: ChartPlan,
}

impl ChartPlan {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartPlanJsonContractV1 {
            schema_version: CHART_PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Accepts either a bare plan or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(plan) = serde_json::from_str::<ChartPlan>(input) {
            return Ok(plan);
        }
        let payload: ChartPlanJsonContractV1 = serde_json::from_str(input)?;
        if payload.schema_version != CHART_PLAN_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}

impl<R: Renderer> ChartView<R> {
    pub fn plan_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.plan().to_json_contract_v1_pretty()
    }
}
