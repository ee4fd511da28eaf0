//! Error handling for the risk scoring engine.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod matrix_config_error;
pub mod provider_error;
pub mod scoring_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::RiskErrorCode;
pub use matrix_config_error::MatrixConfigError;
pub use provider_error::ProviderError;
pub use scoring_error::ScoringError;
