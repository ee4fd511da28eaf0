//! GUT (Gravity × Urgency × Tendency) triage scoring.
//!
//! Bands: ≥100 very high, 64–99 high, 27–63 medium, 8–26 low, ≤7 very low.

use riskmatrix_core::errors::ScoringError;
use riskmatrix_core::models::{GutAnalysis, GutFactors, GutPriority};

/// Priority band for a GUT score.
pub fn gut_priority(score: u32) -> GutPriority {
    match score {
        100.. => GutPriority::VeryHigh,
        64..=99 => GutPriority::High,
        27..=63 => GutPriority::Medium,
        8..=26 => GutPriority::Low,
        _ => GutPriority::VeryLow,
    }
}

/// Score validated factors.
pub fn analyze_factors(factors: GutFactors) -> GutAnalysis {
    let score = factors.score();
    GutAnalysis {
        gravity: factors.gravity(),
        urgency: factors.urgency(),
        tendency: factors.tendency(),
        score,
        priority: gut_priority(score),
    }
}

/// Validate three raw 1–5 ratings and score them.
///
/// Out-of-range ratings are rejected rather than clamped: a clamped rating
/// would misstate the triage signal.
pub fn calculate_gut(gravity: u8, urgency: u8, tendency: u8) -> Result<GutAnalysis, ScoringError> {
    GutFactors::new(gravity, urgency, tendency).map(analyze_factors)
}
