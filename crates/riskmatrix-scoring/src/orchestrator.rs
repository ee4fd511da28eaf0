//! Pure risk analysis: aggregation + classification + optional GUT.

use riskmatrix_core::errors::AnalysisError;
use riskmatrix_core::models::{MatrixDimension, RiskAnalysisRequest, RiskAnalysisResult};

use crate::aggregation::calculate_average_score;
use crate::classifier::classify;
use crate::gut::analyze_factors;

/// Analyze one risk under a known matrix dimension.
///
/// Never fails on answer content: empty answer sets degrade to a score of 0.
/// The only error is an out-of-range GUT rating when all three are supplied.
pub fn analyze(
    request: &RiskAnalysisRequest,
    dimension: MatrixDimension,
) -> Result<RiskAnalysisResult, AnalysisError> {
    let gut_analysis = match request.gut {
        Some(ref input) => input.factors()?.map(analyze_factors),
        None => None,
    };

    let probability_score = calculate_average_score(&request.probability_answers);
    let impact_score = calculate_average_score(&request.impact_answers);

    Ok(RiskAnalysisResult {
        risk_type: request.risk_type.clone(),
        matrix_dimension: dimension,
        probability_score,
        impact_score,
        qualitative_level: classify(probability_score, impact_score, dimension),
        gut_analysis,
    })
}
