//! Scoring errors.

use super::error_code::{self, RiskErrorCode};

/// Errors raised by the pure scoring functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("GUT factor {factor} must be between 1 and 5, got {value}")]
    InvalidGutFactor { factor: &'static str, value: u8 },

    #[error("answer {question_id} has value {value}, outside 1..={dimension}")]
    AnswerOutOfRange {
        question_id: String,
        value: i32,
        dimension: u8,
    },
}

impl RiskErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGutFactor { .. } => error_code::INVALID_GUT_FACTOR,
            Self::AnswerOutOfRange { .. } => error_code::ANSWER_OUT_OF_RANGE,
        }
    }
}
