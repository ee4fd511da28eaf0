//! Qualitative classifier: (probability, impact) → risk level.

use riskmatrix_core::models::{MatrixDimension, RiskLevel};

use crate::thresholds::{self, threshold_table};

/// Round a score to the nearest integer (halves up) and clamp it to
/// `1..=N`. Non-finite and sub-1 scores land on 1.
pub fn round_and_clamp(score: f64, dimension: MatrixDimension) -> u8 {
    // `as` saturates and maps NaN to 0, so the clamp covers every input.
    let rounded = (score + 0.5).floor() as i64;
    rounded.clamp(1, i64::from(dimension.size())) as u8
}

/// `round(probability) × round(impact)` after clamping both axes.
pub fn risk_product(probability: f64, impact: f64, dimension: MatrixDimension) -> u32 {
    u32::from(round_and_clamp(probability, dimension)) * u32::from(round_and_clamp(impact, dimension))
}

/// Classify a score pair under the dimension's threshold table.
pub fn classify(probability: f64, impact: f64, dimension: MatrixDimension) -> RiskLevel {
    let product = risk_product(probability, impact, dimension);
    thresholds::level_for_product(threshold_table(dimension), product)
}
