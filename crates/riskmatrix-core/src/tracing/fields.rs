//! Structured field names used in resolver log events.
//!
//! Keeping them in one place lets log queries and dashboards rely on stable
//! keys.

/// Tenant whose configuration was resolved.
pub const TENANT_ID: &str = "tenant_id";

/// `tenant` or `default:<reason>`.
pub const RESOLUTION_SOURCE: &str = "resolution_source";

/// Resolved matrix dimension (4 or 5).
pub const MATRIX_DIMENSION: &str = "matrix_dimension";

/// Wall time of the provider read in milliseconds.
pub const ELAPSED_MS: &str = "elapsed_ms";

/// Error code of a recovered failure.
pub const ERROR_CODE: &str = "error_code";

/// Provider that served the read.
pub const PROVIDER: &str = "provider";
