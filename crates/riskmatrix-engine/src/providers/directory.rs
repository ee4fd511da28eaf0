//! Settings documents on disk, one `<tenant_id>.json` per tenant.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use riskmatrix_core::config::ProviderConfig;
use riskmatrix_core::errors::{ConfigError, ProviderError};
use riskmatrix_core::traits::ConfigurationProvider;

/// Reads tenant settings from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct DirectorySettings {
    root: PathBuf,
}

impl DirectorySettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build from `[provider] settings_dir`.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        match config.settings_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => Ok(Self::new(dir)),
            _ => Err(ConfigError::ValidationFailed {
                field: "provider.settings_dir".to_string(),
                message: "a settings directory is required for DirectorySettings".to_string(),
            }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn settings_path(&self, tenant_id: &str) -> Result<PathBuf, ProviderError> {
        if !is_valid_tenant_id(tenant_id) {
            return Err(ProviderError::InvalidTenantId {
                tenant_id: tenant_id.to_string(),
            });
        }
        Ok(self.root.join(format!("{tenant_id}.json")))
    }
}

/// Tenant ids become file names: ASCII alphanumerics plus `-`, `_` and `.`,
/// never leading with `.`.
fn is_valid_tenant_id(tenant_id: &str) -> bool {
    !tenant_id.is_empty()
        && !tenant_id.starts_with('.')
        && tenant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl ConfigurationProvider for DirectorySettings {
    async fn fetch_settings(&self, tenant_id: &str) -> Result<Option<Value>, ProviderError> {
        let path = self.settings_path(tenant_id)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ProviderError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| ProviderError::Malformed {
                tenant_id: tenant_id.to_string(),
                message: e.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_id_rules() {
        assert!(is_valid_tenant_id("acme"));
        assert!(is_valid_tenant_id("acme-eu_2.prod"));
        assert!(!is_valid_tenant_id(""));
        assert!(!is_valid_tenant_id(".."));
        assert!(!is_valid_tenant_id(".hidden"));
        assert!(!is_valid_tenant_id("a/b"));
        assert!(!is_valid_tenant_id("a\\b"));
        assert!(!is_valid_tenant_id("tenant id"));
    }

    #[test]
    fn from_config_requires_directory() {
        assert!(DirectorySettings::from_config(&ProviderConfig::default()).is_err());
        let cfg = ProviderConfig {
            settings_dir: Some("/srv/settings".into()),
        };
        let provider = DirectorySettings::from_config(&cfg).unwrap();
        assert_eq!(provider.root(), Path::new("/srv/settings"));
    }
}
