//! Answer aggregation: many answers → one axis score.

use riskmatrix_core::errors::ScoringError;
use riskmatrix_core::models::{Answer, MatrixDimension};

/// Mean of the answer values, rounded half-away-from-zero to 2 decimals.
///
/// An empty slice yields `0.0`. That is a documented degenerate case, not an
/// error; callers needing a meaningful score must not pass an empty set.
pub fn calculate_average_score(answers: &[Answer]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let sum: i64 = answers.iter().map(|a| i64::from(a.value)).sum();
    round2(sum as f64 / answers.len() as f64)
}

/// Round to 2 decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Check every answer value lies in `1..=N` for the dimension.
///
/// Optional caller-side validation; the aggregator itself accepts anything.
pub fn validate_answers(answers: &[Answer], dimension: MatrixDimension) -> Result<(), ScoringError> {
    let max = i32::from(dimension.size());
    match answers.iter().find(|a| !(1..=max).contains(&a.value)) {
        Some(bad) => Err(ScoringError::AnswerOutOfRange {
            question_id: bad.question_id.clone(),
            value: bad.value,
            dimension: dimension.size(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: &[i32]) -> Vec<Answer> {
        values.iter().map(|&v| Answer::with_value(v)).collect()
    }

    #[test]
    fn mean_of_one_two_three_is_two() {
        assert_eq!(calculate_average_score(&answers(&[1, 2, 3])), 2.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(calculate_average_score(&[]), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(calculate_average_score(&answers(&[2, 3, 3])), 2.67);
        assert_eq!(calculate_average_score(&answers(&[1, 1, 2])), 1.33);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn validate_flags_first_out_of_range() {
        let set = vec![
            Answer::new("a", 4, "Likely"),
            Answer::new("b", 5, "Almost certain"),
            Answer::new("c", 0, ""),
        ];
        assert!(validate_answers(&set, MatrixDimension::Five).is_err());
        match validate_answers(&set, MatrixDimension::Four).unwrap_err() {
            ScoringError::AnswerOutOfRange { question_id, .. } => assert_eq!(question_id, "b"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_in_range() {
        assert!(validate_answers(&answers(&[1, 2, 3, 4]), MatrixDimension::Four).is_ok());
        assert!(validate_answers(&[], MatrixDimension::Four).is_ok());
    }
}
