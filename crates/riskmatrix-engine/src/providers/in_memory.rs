//! In-memory settings, for embedding and tests.

use std::collections::HashMap;

use serde_json::Value;

use riskmatrix_core::errors::ProviderError;
use riskmatrix_core::traits::ConfigurationProvider;

/// Tenant id → settings document.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    tenants: HashMap<String, Value>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_tenant(mut self, tenant_id: impl Into<String>, settings: Value) -> Self {
        self.insert(tenant_id, settings);
        self
    }

    /// Set a tenant's settings document, replacing any previous one.
    pub fn insert(&mut self, tenant_id: impl Into<String>, settings: Value) {
        self.tenants.insert(tenant_id.into(), settings);
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

impl ConfigurationProvider for InMemorySettings {
    async fn fetch_settings(&self, tenant_id: &str) -> Result<Option<Value>, ProviderError> {
        Ok(self.tenants.get(tenant_id).cloned())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
