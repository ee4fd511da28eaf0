//! Tenant matrix resolution.
//!
//! Resolution never fails. Every path that cannot produce a tenant matrix
//! (no tenant, nothing configured, provider error, bad shape) yields the
//! built-in 4×4 default, and the reason is kept in [`ResolutionSource`].

pub mod parse;
mod resolution;

use std::time::Instant;

use tracing::Instrument;

use riskmatrix_core::config::ResolverConfig;
use riskmatrix_core::errors::RiskErrorCode;
use riskmatrix_core::models::MatrixConfiguration;
use riskmatrix_core::traits::ConfigurationProvider;

pub use parse::parse_matrix_settings;
pub use resolution::{DefaultReason, Resolution, ResolutionSource};

/// Reads tenant settings through a provider and turns them into a
/// [`MatrixConfiguration`].
pub struct MatrixResolver<P: ConfigurationProvider> {
    provider: P,
    settings_key: String,
    accept_top_level: bool,
}

impl<P: ConfigurationProvider> MatrixResolver<P> {
    pub fn new(provider: P, config: &ResolverConfig) -> Self {
        Self {
            provider,
            settings_key: config.effective_settings_key().to_string(),
            accept_top_level: config.effective_accept_top_level(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn settings_key(&self) -> &str {
        &self.settings_key
    }

    /// Resolve the tenant's matrix, falling back to the built-in default.
    pub async fn resolve(&self, tenant_id: Option<&str>) -> MatrixConfiguration {
        self.resolve_with_source(tenant_id).await.configuration
    }

    /// Resolve the tenant's matrix and report where it came from.
    pub async fn resolve_with_source(&self, tenant_id: Option<&str>) -> Resolution {
        let provider = self.provider.name();
        let Some(tenant_id) = tenant_id.map(str::trim).filter(|t| !t.is_empty()) else {
            let resolution = Resolution::fallback(DefaultReason::NoTenant);
            tracing::debug!(
                tenant_id = "",
                provider,
                resolution_source = resolution.source.as_str(),
                matrix_dimension = resolution.configuration.dimension().size(),
                elapsed_ms = 0u64,
                "no tenant supplied, using default matrix"
            );
            return resolution;
        };

        let span = riskmatrix_core::resolution_span!(tenant_id, provider);
        self.resolve_tenant(tenant_id).instrument(span).await
    }

    async fn resolve_tenant(&self, tenant_id: &str) -> Resolution {
        let provider = self.provider.name();
        let start = Instant::now();
        let fetched = self.provider.fetch_settings(tenant_id).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let document = match fetched {
            Ok(Some(document)) => document,
            Ok(None) => {
                let resolution = Resolution::fallback(DefaultReason::NotConfigured);
                tracing::debug!(
                    tenant_id,
                    provider,
                    resolution_source = resolution.source.as_str(),
                    matrix_dimension = resolution.configuration.dimension().size(),
                    elapsed_ms,
                    "tenant has no settings, using default matrix"
                );
                return resolution;
            }
            Err(e) => {
                let resolution = Resolution::fallback(DefaultReason::LookupFailed);
                tracing::warn!(
                    tenant_id,
                    provider,
                    resolution_source = resolution.source.as_str(),
                    matrix_dimension = resolution.configuration.dimension().size(),
                    elapsed_ms,
                    error_code = e.error_code(),
                    error = %e,
                    "settings lookup failed, using default matrix"
                );
                return resolution;
            }
        };

        match parse_matrix_settings(&document, &self.settings_key, self.accept_top_level) {
            Ok(Some(configuration)) => {
                let resolution = Resolution::tenant(configuration);
                tracing::debug!(
                    tenant_id,
                    provider,
                    resolution_source = resolution.source.as_str(),
                    matrix_dimension = resolution.configuration.dimension().size(),
                    elapsed_ms,
                    "resolved tenant matrix"
                );
                resolution
            }
            Ok(None) => {
                let resolution = Resolution::fallback(DefaultReason::NotConfigured);
                tracing::debug!(
                    tenant_id,
                    provider,
                    resolution_source = resolution.source.as_str(),
                    matrix_dimension = resolution.configuration.dimension().size(),
                    elapsed_ms,
                    "no matrix configured, using default matrix"
                );
                resolution
            }
            Err(e) => {
                let resolution = Resolution::fallback(DefaultReason::Malformed);
                tracing::warn!(
                    tenant_id,
                    provider,
                    resolution_source = resolution.source.as_str(),
                    matrix_dimension = resolution.configuration.dimension().size(),
                    elapsed_ms,
                    error_code = e.error_code(),
                    error = %e,
                    "malformed matrix settings, using default matrix"
                );
                resolution
            }
        }
    }
}
