//! # riskmatrix-engine
//!
//! Tenant-aware risk analysis. Resolves a tenant's severity-matrix
//! configuration through an injected [`ConfigurationProvider`], falling back
//! to the built-in 4×4 matrix on any failure, then delegates to the pure
//! scoring functions in `riskmatrix-scoring`.
//!
//! The configuration read is the only asynchronous step and the only place
//! this workspace logs.
//!
//! [`ConfigurationProvider`]: riskmatrix_core::traits::ConfigurationProvider

pub mod engine;
pub mod providers;
pub mod resolver;

pub use engine::RiskAnalysisEngine;
pub use providers::{DirectorySettings, InMemorySettings, NoTenantSettings};
pub use resolver::{DefaultReason, MatrixResolver, Resolution, ResolutionSource};

pub use riskmatrix_scoring::{generate_grid, heatmap, locate_cell, CellPosition, LabeledGrid};
