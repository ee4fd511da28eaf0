//! # riskmatrix-core
//!
//! Foundation crate for the risk scoring engine.
//! Defines the data model, the configuration-provider trait, errors,
//! engine config, tracing setup, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{
    AnalysisError, ConfigError, MatrixConfigError, ProviderError, RiskErrorCode, ScoringError,
};
pub use models::{
    Answer, GutAnalysis, GutFactors, GutPriority, MatrixCell, MatrixConfiguration,
    MatrixDimension, RiskAnalysisResult, RiskLevel,
};
pub use traits::ConfigurationProvider;

// Span macros expand in the caller's crate.
#[doc(hidden)]
pub use ::tracing as __tracing;
