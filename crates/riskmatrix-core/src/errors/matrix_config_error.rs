//! Matrix configuration shape errors.
//!
//! Raised while parsing a tenant's settings document. The resolver never
//! propagates these; it logs them and substitutes the default matrix.

use super::error_code::{self, RiskErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixConfigError {
    #[error("unsupported matrix dimension: {value}")]
    UnsupportedDimension { value: String },

    #[error("{axis} labels: expected {expected}, got {actual}")]
    LabelCountMismatch {
        axis: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field {field} is missing or has the wrong type")]
    InvalidField { field: &'static str },

    #[error("matrix settings do not match the expected shape: {message}")]
    InvalidShape { message: String },

    #[error("settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },
}

impl RiskErrorCode for MatrixConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion { .. } => error_code::UNSUPPORTED_SETTINGS_VERSION,
            _ => error_code::MATRIX_CONFIG_ERROR,
        }
    }
}
