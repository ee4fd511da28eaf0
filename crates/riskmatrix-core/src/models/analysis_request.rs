use serde::{Deserialize, Serialize};

use super::{Answer, GutFactors};
use crate::errors::ScoringError;

/// Raw GUT ratings as supplied by a caller. Any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutInput {
    pub gravity: Option<u8>,
    pub urgency: Option<u8>,
    pub tendency: Option<u8>,
}

impl GutInput {
    pub fn new(gravity: u8, urgency: u8, tendency: u8) -> Self {
        Self {
            gravity: Some(gravity),
            urgency: Some(urgency),
            tendency: Some(tendency),
        }
    }

    /// Validated factors when all three ratings are present, `None` when any
    /// is missing. A present but out-of-range rating is an error.
    pub fn factors(&self) -> Result<Option<GutFactors>, ScoringError> {
        match (self.gravity, self.urgency, self.tendency) {
            (Some(g), Some(u), Some(t)) => GutFactors::new(g, u, t).map(Some),
            _ => Ok(None),
        }
    }
}

/// Everything needed to analyze one risk under a given matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisRequest {
    pub risk_type: String,
    #[serde(default)]
    pub probability_answers: Vec<Answer>,
    #[serde(default)]
    pub impact_answers: Vec<Answer>,
    #[serde(default)]
    pub gut: Option<GutInput>,
}

impl RiskAnalysisRequest {
    pub fn new(
        risk_type: impl Into<String>,
        probability_answers: Vec<Answer>,
        impact_answers: Vec<Answer>,
    ) -> Self {
        Self {
            risk_type: risk_type.into(),
            probability_answers,
            impact_answers,
            gut: None,
        }
    }

    pub fn with_gut(mut self, gut: GutInput) -> Self {
        self.gut = Some(gut);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_gut_input_is_absent() {
        let input = GutInput {
            gravity: Some(5),
            urgency: None,
            tendency: Some(2),
        };
        assert_eq!(input.factors().unwrap(), None);
    }

    #[test]
    fn partial_gut_input_skips_range_check() {
        let input = GutInput {
            gravity: Some(9),
            urgency: Some(1),
            tendency: None,
        };
        assert_eq!(input.factors().unwrap(), None);
    }

    #[test]
    fn full_gut_input_is_validated() {
        assert!(GutInput::new(1, 2, 3).factors().unwrap().is_some());
        assert!(GutInput::new(1, 2, 6).factors().is_err());
    }

    #[test]
    fn request_deserializes_without_gut() {
        let req: RiskAnalysisRequest = serde_json::from_str(
            r#"{"riskType":"operational","probabilityAnswers":[{"questionId":"p1","value":2}]}"#,
        )
        .unwrap();
        assert_eq!(req.risk_type, "operational");
        assert_eq!(req.probability_answers.len(), 1);
        assert!(req.impact_answers.is_empty());
        assert!(req.gut.is_none());
    }
}
