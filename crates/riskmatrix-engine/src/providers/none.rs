use serde_json::Value;

use riskmatrix_core::errors::ProviderError;
use riskmatrix_core::traits::ConfigurationProvider;

/// Provider for deployments without tenant settings. Every resolution is the
/// built-in default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTenantSettings;

impl ConfigurationProvider for NoTenantSettings {
    async fn fetch_settings(&self, _tenant_id: &str) -> Result<Option<Value>, ProviderError> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
