//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ProviderConfig, ResolverConfig};
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RISKMATRIX_*`)
/// 3. Project config (`riskmatrix.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub resolver: ResolverConfig,
    pub provider: ProviderConfig,
    pub observability: ObservabilityConfig,
}

/// Programmatic overrides, typically from a host application's own flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub settings_key: Option<String>,
    pub settings_dir: Option<String>,
    pub log_json: Option<bool>,
}

impl EngineConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
        if let Some(ref key) = config.resolver.settings_key {
            if key.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "resolver.settings_key".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref dir) = config.provider.settings_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "provider.settings_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut EngineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut EngineConfig, other: &EngineConfig) {
        if other.resolver.settings_key.is_some() {
            base.resolver.settings_key = other.resolver.settings_key.clone();
        }
        if other.resolver.accept_top_level.is_some() {
            base.resolver.accept_top_level = other.resolver.accept_top_level;
        }
        if other.provider.settings_dir.is_some() {
            base.provider.settings_dir = other.provider.settings_dir.clone();
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
        if other.observability.json.is_some() {
            base.observability.json = other.observability.json;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut EngineConfig) {
        if let Ok(val) = std::env::var("RISKMATRIX_SETTINGS_KEY") {
            config.resolver.settings_key = Some(val);
        }
        if let Ok(val) = std::env::var("RISKMATRIX_SETTINGS_DIR") {
            config.provider.settings_dir = Some(val);
        }
        if let Ok(val) = std::env::var("RISKMATRIX_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut EngineConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.settings_key {
            config.resolver.settings_key = Some(v.clone());
        }
        if let Some(ref v) = o.settings_dir {
            config.provider.settings_dir = Some(v.clone());
        }
        if let Some(v) = o.log_json {
            config.observability.json = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
