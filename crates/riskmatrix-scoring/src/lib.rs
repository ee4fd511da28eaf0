//! # riskmatrix-scoring
//!
//! Pure scoring functions: answer aggregation, qualitative classification
//! against per-dimension threshold tables, GUT triage, the analysis
//! orchestrator, and matrix grid generation. No I/O, no logging.

pub mod aggregation;
pub mod classifier;
pub mod grid;
pub mod gut;
pub mod orchestrator;
pub mod thresholds;

pub use aggregation::{calculate_average_score, validate_answers};
pub use classifier::{classify, risk_product, round_and_clamp};
pub use grid::{generate_grid, heatmap, locate_cell, CellPosition, LabeledGrid};
pub use gut::{calculate_gut, gut_priority};
pub use orchestrator::analyze;
pub use thresholds::{threshold_table, LevelBand};
