//! Engine configuration.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod engine_config;
pub mod observability_config;
pub mod provider_config;
pub mod resolver_config;

pub use engine_config::{ConfigOverrides, EngineConfig};
pub use observability_config::ObservabilityConfig;
pub use provider_config::ProviderConfig;
pub use resolver_config::ResolverConfig;
