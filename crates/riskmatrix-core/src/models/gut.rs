use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{GUT_FACTOR_MAX, GUT_FACTOR_MIN};
use crate::errors::ScoringError;

/// Triage priority band from a GUT score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum GutPriority {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl GutPriority {
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

impl fmt::Display for GutPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gravity, urgency and tendency, each a rating on the fixed 1–5 scale.
///
/// Only constructible through [`GutFactors::new`], so a value of this type
/// is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GutFactors {
    gravity: u8,
    urgency: u8,
    tendency: u8,
}

impl GutFactors {
    /// Validate three raw ratings. Factors are checked in the order
    /// gravity, urgency, tendency; the first out-of-range one is reported.
    pub fn new(gravity: u8, urgency: u8, tendency: u8) -> Result<Self, ScoringError> {
        check_factor("gravity", gravity)?;
        check_factor("urgency", urgency)?;
        check_factor("tendency", tendency)?;
        Ok(Self {
            gravity,
            urgency,
            tendency,
        })
    }

    pub fn gravity(self) -> u8 {
        self.gravity
    }

    pub fn urgency(self) -> u8 {
        self.urgency
    }

    pub fn tendency(self) -> u8 {
        self.tendency
    }

    /// `gravity × urgency × tendency`, in 1..=125.
    pub fn score(self) -> u32 {
        u32::from(self.gravity) * u32::from(self.urgency) * u32::from(self.tendency)
    }
}

fn check_factor(factor: &'static str, value: u8) -> Result<(), ScoringError> {
    if (GUT_FACTOR_MIN..=GUT_FACTOR_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::InvalidGutFactor { factor, value })
    }
}

/// Computed GUT triage signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GutAnalysis {
    pub gravity: u8,
    pub urgency: u8,
    pub tendency: u8,
    pub score: u32,
    pub priority: GutPriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_scale() {
        let f = GutFactors::new(1, 3, 5).unwrap();
        assert_eq!(f.score(), 15);
        assert_eq!(GutFactors::new(5, 5, 5).unwrap().score(), 125);
    }

    #[test]
    fn reports_first_bad_factor() {
        assert_eq!(
            GutFactors::new(3, 0, 9).unwrap_err(),
            ScoringError::InvalidGutFactor {
                factor: "urgency",
                value: 0
            }
        );
        assert_eq!(
            GutFactors::new(6, 1, 1).unwrap_err(),
            ScoringError::InvalidGutFactor {
                factor: "gravity",
                value: 6
            }
        );
    }
}
