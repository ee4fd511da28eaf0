//! DirectorySettings against a real temporary directory.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use riskmatrix_core::errors::{ProviderError, RiskErrorCode};
use riskmatrix_core::models::MatrixDimension;
use riskmatrix_core::traits::ConfigurationProvider;
use riskmatrix_engine::{DefaultReason, DirectorySettings, RiskAnalysisEngine, ResolutionSource};

fn settings_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("acme.json"),
        json!({"risk_matrix": {
            "type": "5x5",
            "impact_labels": ["1", "2", "3", "4", "5"],
            "likelihood_labels": ["1", "2", "3", "4", "5"]
        }})
        .to_string(),
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    dir
}

#[tokio::test]
async fn reads_tenant_document() {
    let dir = settings_dir();
    let provider = DirectorySettings::new(dir.path());
    let doc = provider.fetch_settings("acme").await.unwrap().unwrap();
    assert_eq!(doc["risk_matrix"]["type"], "5x5");
}

#[tokio::test]
async fn missing_file_is_none() {
    let dir = settings_dir();
    let provider = DirectorySettings::new(dir.path());
    assert!(provider.fetch_settings("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn rejects_path_traversal() {
    let dir = settings_dir();
    let provider = DirectorySettings::new(dir.path());
    for bad in ["../acme", "a/b", ".acme"] {
        let err = provider.fetch_settings(bad).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTenantId { .. }), "{bad}");
        assert_eq!(err.error_code(), "INVALID_TENANT_ID");
    }
}

#[tokio::test]
async fn unparseable_json_is_malformed() {
    let dir = settings_dir();
    let provider = DirectorySettings::new(dir.path());
    let err = provider.fetch_settings("broken").await.unwrap_err();
    assert!(matches!(err, ProviderError::Malformed { .. }));
}

#[tokio::test]
async fn engine_over_directory() {
    let dir = settings_dir();
    let engine = RiskAnalysisEngine::with_defaults(DirectorySettings::new(dir.path()));

    let acme = engine.resolve_with_source(Some("acme")).await;
    assert_eq!(acme.source, ResolutionSource::Tenant);
    assert_eq!(acme.configuration.dimension(), MatrixDimension::Five);

    let broken = engine.resolve_with_source(Some("broken")).await;
    assert_eq!(
        broken.source,
        ResolutionSource::Default(DefaultReason::LookupFailed)
    );

    let traversal = engine.resolve_with_source(Some("../etc/passwd")).await;
    assert_eq!(
        traversal.source,
        ResolutionSource::Default(DefaultReason::LookupFailed)
    );
}
