//! Tracing setup, span definitions, and structured field names.

pub mod fields;
pub mod setup;
pub mod spans;

pub use setup::{build_filter, init_tracing, init_tracing_with};
