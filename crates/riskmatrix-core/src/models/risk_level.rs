use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MatrixDimension;

/// Qualitative risk level derived from the probability × impact product.
///
/// Ordered from least to most severe. A 4×4 matrix uses the upper four
/// levels only; `VeryLow` appears exclusively in the 5×5 vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    const FOUR_LEVELS: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];
    const FIVE_LEVELS: [RiskLevel; 5] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// The ordered level vocabulary for a matrix dimension, lowest first.
    pub fn levels_for(dimension: MatrixDimension) -> &'static [RiskLevel] {
        match dimension {
            MatrixDimension::Four => &Self::FOUR_LEVELS,
            MatrixDimension::Five => &Self::FIVE_LEVELS,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
