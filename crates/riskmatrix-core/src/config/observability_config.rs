//! Observability configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_LOG_JSON};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RISKMATRIX_LOG` is unset.
    /// Default: "riskmatrix=info".
    pub log_filter: Option<String>,
    /// Emit JSON log lines. Default: false.
    pub json: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(DEFAULT_LOG_JSON)
    }
}
