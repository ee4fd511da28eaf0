//! Analysis errors.

use super::error_code::RiskErrorCode;
use super::ScoringError;

/// Errors that can surface from a risk analysis.
///
/// Configuration lookup never appears here: the resolver always produces a
/// usable matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
}

impl RiskErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
        }
    }
}
