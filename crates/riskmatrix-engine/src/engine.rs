//! RiskAnalysisEngine: resolve the tenant's matrix, then score.
//!
//! The engine holds a provider and the resolver settings, nothing else. A
//! resolved configuration lives only for the call that resolved it.

use tracing::Instrument;

use riskmatrix_core::config::{EngineConfig, ResolverConfig};
use riskmatrix_core::errors::AnalysisError;
use riskmatrix_core::models::{
    MatrixConfiguration, MatrixDimension, RiskAnalysisRequest, RiskAnalysisResult,
};
use riskmatrix_core::traits::ConfigurationProvider;
use riskmatrix_scoring::LabeledGrid;

use crate::resolver::{MatrixResolver, Resolution};

/// Tenant-aware risk analysis over a [`ConfigurationProvider`].
pub struct RiskAnalysisEngine<P: ConfigurationProvider> {
    resolver: MatrixResolver<P>,
}

impl<P: ConfigurationProvider> RiskAnalysisEngine<P> {
    pub fn new(provider: P, config: &EngineConfig) -> Self {
        Self {
            resolver: MatrixResolver::new(provider, &config.resolver),
        }
    }

    /// Engine with compiled-default resolver settings.
    pub fn with_defaults(provider: P) -> Self {
        Self {
            resolver: MatrixResolver::new(provider, &ResolverConfig::default()),
        }
    }

    pub fn resolver(&self) -> &MatrixResolver<P> {
        &self.resolver
    }

    /// The tenant's matrix, or the built-in 4×4 default.
    pub async fn resolve_configuration(&self, tenant_id: Option<&str>) -> MatrixConfiguration {
        self.resolver.resolve(tenant_id).await
    }

    pub async fn resolve_with_source(&self, tenant_id: Option<&str>) -> Resolution {
        self.resolver.resolve_with_source(tenant_id).await
    }

    /// Pure analysis under a known dimension. No I/O.
    pub fn analyze(
        &self,
        request: &RiskAnalysisRequest,
        dimension: MatrixDimension,
    ) -> Result<RiskAnalysisResult, AnalysisError> {
        riskmatrix_scoring::analyze(request, dimension)
    }

    /// Resolve the tenant's matrix, then analyze under its dimension.
    pub async fn analyze_for_tenant(
        &self,
        tenant_id: Option<&str>,
        request: &RiskAnalysisRequest,
    ) -> Result<RiskAnalysisResult, AnalysisError> {
        let configuration = self.resolver.resolve(tenant_id).await;
        riskmatrix_scoring::analyze(request, configuration.dimension())
    }

    /// Resolve once, then analyze every request under that configuration.
    ///
    /// One result per request, in input order. A bad GUT triple fails only
    /// its own request.
    pub async fn analyze_batch_for_tenant(
        &self,
        tenant_id: Option<&str>,
        requests: &[RiskAnalysisRequest],
    ) -> Vec<Result<RiskAnalysisResult, AnalysisError>> {
        let span = riskmatrix_core::batch_span!(tenant_id.unwrap_or(""), requests.len());
        async {
            let dimension = self.resolver.resolve(tenant_id).await.dimension();
            requests
                .iter()
                .map(|request| riskmatrix_scoring::analyze(request, dimension))
                .collect()
        }
        .instrument(span)
        .await
    }

    /// The tenant's grid with its axis labels.
    pub async fn labeled_grid_for_tenant(&self, tenant_id: Option<&str>) -> LabeledGrid {
        let configuration = self.resolver.resolve(tenant_id).await;
        LabeledGrid::from_configuration(&configuration)
    }
}
