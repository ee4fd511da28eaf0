//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ACCEPT_TOP_LEVEL, DEFAULT_SETTINGS_KEY};

/// Where the resolver looks for the matrix inside a settings document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Key of the matrix sub-object. Default: "risk_matrix".
    pub settings_key: Option<String>,
    /// Treat a document with a top-level `type` field as the matrix itself
    /// when the key is absent. Default: true.
    pub accept_top_level: Option<bool>,
}

impl ResolverConfig {
    pub fn effective_settings_key(&self) -> &str {
        self.settings_key.as_deref().unwrap_or(DEFAULT_SETTINGS_KEY)
    }

    pub fn effective_accept_top_level(&self) -> bool {
        self.accept_top_level.unwrap_or(DEFAULT_ACCEPT_TOP_LEVEL)
    }
}
