//! GUT triage scoring.

use riskmatrix_core::errors::ScoringError;
use riskmatrix_core::models::GutPriority;
use riskmatrix_scoring::{calculate_gut, gut_priority};

#[test]
fn priority_band_boundaries() {
    assert_eq!(gut_priority(125), GutPriority::VeryHigh);
    assert_eq!(gut_priority(100), GutPriority::VeryHigh);
    assert_eq!(gut_priority(99), GutPriority::High);
    assert_eq!(gut_priority(64), GutPriority::High);
    assert_eq!(gut_priority(63), GutPriority::Medium);
    assert_eq!(gut_priority(27), GutPriority::Medium);
    assert_eq!(gut_priority(26), GutPriority::Low);
    assert_eq!(gut_priority(8), GutPriority::Low);
    assert_eq!(gut_priority(7), GutPriority::VeryLow);
    assert_eq!(gut_priority(1), GutPriority::VeryLow);
}

#[test]
fn score_is_product_of_factors() {
    let gut = calculate_gut(5, 4, 5).unwrap();
    assert_eq!(gut.score, 100);
    assert_eq!(gut.priority, GutPriority::VeryHigh);
    assert_eq!((gut.gravity, gut.urgency, gut.tendency), (5, 4, 5));

    let gut = calculate_gut(4, 4, 4).unwrap();
    assert_eq!(gut.score, 64);
    assert_eq!(gut.priority, GutPriority::High);

    let gut = calculate_gut(3, 3, 3).unwrap();
    assert_eq!(gut.score, 27);
    assert_eq!(gut.priority, GutPriority::Medium);

    let gut = calculate_gut(2, 2, 2).unwrap();
    assert_eq!(gut.score, 8);
    assert_eq!(gut.priority, GutPriority::Low);

    let gut = calculate_gut(1, 1, 5).unwrap();
    assert_eq!(gut.score, 5);
    assert_eq!(gut.priority, GutPriority::VeryLow);
}

#[test]
fn zero_factor_is_rejected() {
    assert_eq!(
        calculate_gut(0, 3, 3).unwrap_err(),
        ScoringError::InvalidGutFactor {
            factor: "gravity",
            value: 0
        }
    );
}

#[test]
fn factor_above_five_is_rejected_not_clamped() {
    assert_eq!(
        calculate_gut(5, 5, 6).unwrap_err(),
        ScoringError::InvalidGutFactor {
            factor: "tendency",
            value: 6
        }
    );
}

#[test]
fn every_valid_triple_scores_within_range() {
    for g in 1..=5 {
        for u in 1..=5 {
            for t in 1..=5 {
                let gut = calculate_gut(g, u, t).unwrap();
                assert!((1..=125).contains(&gut.score));
                assert_eq!(gut.priority, gut_priority(gut.score));
            }
        }
    }
}
