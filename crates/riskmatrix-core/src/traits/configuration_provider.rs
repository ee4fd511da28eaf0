//! ConfigurationProvider: read access to tenant settings.
//!
//! The engine never writes tenant settings. A provider hands back the whole
//! settings document for a tenant; locating and validating the matrix
//! sub-object is the resolver's job.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::ProviderError;

/// Source of tenant settings documents.
///
/// `Ok(None)` means the tenant has no settings at all. Errors are reported
/// but never fatal: the resolver falls back to the built-in matrix.
#[allow(async_fn_in_trait)]
pub trait ConfigurationProvider: Send + Sync {
    /// Fetch the settings document for a tenant.
    async fn fetch_settings(&self, tenant_id: &str) -> Result<Option<Value>, ProviderError>;

    /// Short provider name used in log events.
    fn name(&self) -> &'static str;
}

impl<P: ConfigurationProvider> ConfigurationProvider for Arc<P> {
    async fn fetch_settings(&self, tenant_id: &str) -> Result<Option<Value>, ProviderError> {
        self.as_ref().fetch_settings(tenant_id).await
    }

    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
}
