//! Pure analysis orchestration.

use riskmatrix_core::errors::{AnalysisError, ScoringError};
use riskmatrix_core::models::*;
use riskmatrix_scoring::analyze;

fn answers(values: &[i32]) -> Vec<Answer> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Answer::new(format!("q{i}"), v, ""))
        .collect()
}

#[test]
fn end_to_end_four_by_four() {
    let request = RiskAnalysisRequest::new("operational", answers(&[2, 3, 3]), answers(&[4, 4]));
    let result = analyze(&request, MatrixDimension::Four).unwrap();

    assert_eq!(result.risk_type, "operational");
    assert_eq!(result.matrix_dimension, MatrixDimension::Four);
    assert_eq!(result.probability_score, 2.67);
    assert_eq!(result.impact_score, 4.0);
    assert_eq!(result.qualitative_level, RiskLevel::VeryHigh);
    assert!(result.gut_analysis.is_none());
}

#[test]
fn same_answers_classify_differently_per_dimension() {
    let request = RiskAnalysisRequest::new("it", answers(&[3]), answers(&[3]));
    assert_eq!(
        analyze(&request, MatrixDimension::Four).unwrap().qualitative_level,
        RiskLevel::High
    );
    assert_eq!(
        analyze(&request, MatrixDimension::Five).unwrap().qualitative_level,
        RiskLevel::High
    );

    let request = RiskAnalysisRequest::new("it", answers(&[1]), answers(&[2]));
    assert_eq!(
        analyze(&request, MatrixDimension::Four).unwrap().qualitative_level,
        RiskLevel::Low
    );
    assert_eq!(
        analyze(&request, MatrixDimension::Five).unwrap().qualitative_level,
        RiskLevel::VeryLow
    );
}

#[test]
fn gut_included_when_all_factors_present() {
    let request = RiskAnalysisRequest::new("finance", answers(&[1]), answers(&[1]))
        .with_gut(GutInput::new(4, 4, 4));
    let result = analyze(&request, MatrixDimension::Five).unwrap();
    let gut = result.gut_analysis.unwrap();
    assert_eq!(gut.score, 64);
    assert_eq!(gut.priority, GutPriority::High);
}

#[test]
fn gut_absent_when_a_factor_is_missing() {
    let request = RiskAnalysisRequest::new("finance", answers(&[1]), answers(&[1])).with_gut(
        GutInput {
            gravity: Some(4),
            urgency: Some(4),
            tendency: None,
        },
    );
    assert!(analyze(&request, MatrixDimension::Four)
        .unwrap()
        .gut_analysis
        .is_none());
}

#[test]
fn invalid_gut_factor_fails_the_analysis() {
    let request = RiskAnalysisRequest::new("finance", answers(&[1]), answers(&[1]))
        .with_gut(GutInput::new(4, 0, 4));
    assert_eq!(
        analyze(&request, MatrixDimension::Four).unwrap_err(),
        AnalysisError::Scoring(ScoringError::InvalidGutFactor {
            factor: "urgency",
            value: 0
        })
    );
}

#[test]
fn empty_answer_sets_degrade_to_zero() {
    let request = RiskAnalysisRequest::new("empty", vec![], vec![]);
    let result = analyze(&request, MatrixDimension::Four).unwrap();
    assert_eq!(result.probability_score, 0.0);
    assert_eq!(result.impact_score, 0.0);
    assert_eq!(result.qualitative_level, RiskLevel::Low);
}

#[test]
fn repeated_calls_are_structurally_equal() {
    let request = RiskAnalysisRequest::new("repeat", answers(&[2, 5, 4]), answers(&[3, 2]))
        .with_gut(GutInput::new(3, 2, 5));
    let a = analyze(&request, MatrixDimension::Five).unwrap();
    let b = analyze(&request, MatrixDimension::Five).unwrap();
    assert_eq!(a, b);
}
