use riskmatrix_core::constants::{COLOR_BLUE, COLOR_GREEN, COLOR_ORANGE, COLOR_RED, COLOR_YELLOW};
use riskmatrix_core::models::RiskLevel;

/// Fixed level → color table. Blue only appears in 5×5 grids.
pub fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::VeryLow => COLOR_BLUE,
        RiskLevel::Low => COLOR_GREEN,
        RiskLevel::Medium => COLOR_YELLOW,
        RiskLevel::High => COLOR_ORANGE,
        RiskLevel::VeryHigh => COLOR_RED,
    }
}
