//! Configuration provider errors.

use super::error_code::{self, RiskErrorCode};

/// Errors a [`ConfigurationProvider`](crate::traits::ConfigurationProvider)
/// may report. All of them are recovered by the resolver.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider {provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("invalid tenant id: {tenant_id:?}")]
    InvalidTenantId { tenant_id: String },

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed settings for tenant {tenant_id}: {message}")]
    Malformed { tenant_id: String, message: String },
}

impl RiskErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTenantId { .. } => error_code::INVALID_TENANT_ID,
            _ => error_code::PROVIDER_ERROR,
        }
    }
}
