//! RiskErrorCode trait for structured error codes.

/// Every error enum implements this to expose a stable, upper-snake error
/// code for log lines and downstream consumers.
pub trait RiskErrorCode {
    /// Returns the error code string (e.g., "INVALID_GUT_FACTOR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_GUT_FACTOR: &str = "INVALID_GUT_FACTOR";
pub const ANSWER_OUT_OF_RANGE: &str = "ANSWER_OUT_OF_RANGE";
pub const MATRIX_CONFIG_ERROR: &str = "MATRIX_CONFIG_ERROR";
pub const UNSUPPORTED_SETTINGS_VERSION: &str = "UNSUPPORTED_SETTINGS_VERSION";
pub const PROVIDER_ERROR: &str = "PROVIDER_ERROR";
pub const INVALID_TENANT_ID: &str = "INVALID_TENANT_ID";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
