//! Per-dimension classification thresholds.
//!
//! 4×4 (product 1–16): ≥10 very high, 7–9 high, 3–6 medium, ≤2 low.
//! 5×5 (product 1–25): ≥17 very high, 9–16 high, 5–8 medium, 3–4 low, ≤2 very low.
//!
//! The boundaries are system-wide policy; tenants configure only the
//! dimension and axis labels.

use riskmatrix_core::models::{MatrixDimension, RiskLevel};

/// A level applies to every product at or above `min_product`, up to the
/// next band's floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBand {
    pub min_product: u32,
    pub level: RiskLevel,
}

const fn band(min_product: u32, level: RiskLevel) -> LevelBand {
    LevelBand { min_product, level }
}

// Sorted by descending min_product; the last band always starts at 1.
static FOUR_BY_FOUR: [LevelBand; 4] = [
    band(10, RiskLevel::VeryHigh),
    band(7, RiskLevel::High),
    band(3, RiskLevel::Medium),
    band(1, RiskLevel::Low),
];

static FIVE_BY_FIVE: [LevelBand; 5] = [
    band(17, RiskLevel::VeryHigh),
    band(9, RiskLevel::High),
    band(5, RiskLevel::Medium),
    band(3, RiskLevel::Low),
    band(1, RiskLevel::VeryLow),
];

/// Threshold table for a dimension, highest band first.
pub fn threshold_table(dimension: MatrixDimension) -> &'static [LevelBand] {
    match dimension {
        MatrixDimension::Four => &FOUR_BY_FOUR,
        MatrixDimension::Five => &FIVE_BY_FIVE,
    }
}

/// Level for a product under a table. Products below every floor (0) take
/// the lowest band.
pub(crate) fn level_for_product(table: &[LevelBand], product: u32) -> RiskLevel {
    table
        .iter()
        .find(|b| product >= b.min_product)
        .or_else(|| table.last())
        .map(|b| b.level)
        .unwrap_or(RiskLevel::Low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_strictly_descending() {
        for d in [MatrixDimension::Four, MatrixDimension::Five] {
            let t = threshold_table(d);
            assert!(t.windows(2).all(|w| w[0].min_product > w[1].min_product));
            assert_eq!(t.last().map(|b| b.min_product), Some(1));
        }
    }

    #[test]
    fn tables_cover_the_dimension_vocabulary() {
        for d in [MatrixDimension::Four, MatrixDimension::Five] {
            let mut levels: Vec<RiskLevel> = threshold_table(d).iter().map(|b| b.level).collect();
            levels.reverse();
            assert_eq!(levels, RiskLevel::levels_for(d));
        }
    }

    #[test]
    fn zero_product_takes_lowest_band() {
        assert_eq!(level_for_product(threshold_table(MatrixDimension::Five), 0), RiskLevel::VeryLow);
    }
}
