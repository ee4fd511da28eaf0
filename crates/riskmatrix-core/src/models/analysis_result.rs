use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{GutAnalysis, MatrixDimension, RiskLevel};

/// Outcome of one risk analysis. Built once per invocation and never
/// mutated; a new invocation yields a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisResult {
    pub risk_type: String,
    #[ts(type = "4 | 5")]
    pub matrix_dimension: MatrixDimension,
    pub probability_score: f64,
    pub impact_score: f64,
    pub qualitative_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gut_analysis: Option<GutAnalysis>,
}
