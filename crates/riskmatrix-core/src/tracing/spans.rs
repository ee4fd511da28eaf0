//! Span definitions for engine operations.

/// Create a configuration resolution span.
#[macro_export]
macro_rules! resolution_span {
    ($tenant_id:expr, $provider:expr) => {
        $crate::__tracing::info_span!(
            "riskmatrix.resolve",
            tenant_id = %$tenant_id,
            provider = %$provider
        )
    };
}

/// Create a batch analysis span.
#[macro_export]
macro_rules! batch_span {
    ($tenant_id:expr, $batch_size:expr) => {
        $crate::__tracing::info_span!(
            "riskmatrix.analyze_batch",
            tenant_id = %$tenant_id,
            batch_size = $batch_size
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RESOLVE: &str = "riskmatrix.resolve";
    pub const ANALYZE_BATCH: &str = "riskmatrix.analyze_batch";
}
