use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::RiskLevel;

/// One cell of the severity matrix grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub probability: u8,
    pub impact: u8,
    pub level: RiskLevel,
    pub color: String,
}
