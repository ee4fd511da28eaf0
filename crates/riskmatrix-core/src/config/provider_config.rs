//! Bundled provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for the providers shipped with the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    /// Directory of `<tenant_id>.json` settings documents, read by
    /// `DirectorySettings`.
    pub settings_dir: Option<String>,
}
