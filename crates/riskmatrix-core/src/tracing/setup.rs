//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging with default settings.
///
/// Reads `RISKMATRIX_LOG` for filter directives, e.g.
/// `RISKMATRIX_LOG=riskmatrix_engine=debug`. Falls back to `riskmatrix=info`
/// if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Filter directives in precedence order: `RISKMATRIX_LOG`, then
/// `log_filter`, then `riskmatrix=info`. Invalid layers are skipped.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.effective_log_filter()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging from an [`ObservabilityConfig`].
///
/// `RISKMATRIX_LOG` still takes precedence over `log_filter`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(build_filter(config));
        // A host may already own the global subscriber; keep theirs.
        let _ = if config.effective_json() {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
