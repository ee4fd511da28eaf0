//! Data model shared by the scoring and engine crates.

pub mod analysis_request;
pub mod analysis_result;
pub mod answer;
pub mod dimension;
pub mod gut;
pub mod matrix_cell;
pub mod matrix_configuration;
pub mod risk_level;

pub use analysis_request::{GutInput, RiskAnalysisRequest};
pub use analysis_result::RiskAnalysisResult;
pub use answer::Answer;
pub use dimension::MatrixDimension;
pub use gut::{GutAnalysis, GutFactors, GutPriority};
pub use matrix_cell::MatrixCell;
pub use matrix_configuration::MatrixConfiguration;
pub use risk_level::RiskLevel;
