use serde::Serialize;

use riskmatrix_core::models::{MatrixCell, MatrixConfiguration, MatrixDimension};

use super::palette::level_color;
use crate::classifier::classify;

/// Full N×N grid, one row per impact level (highest first), one column per
/// probability level (lowest first).
pub fn generate_grid(dimension: MatrixDimension) -> Vec<Vec<MatrixCell>> {
    let n = dimension.size();
    (1..=n)
        .rev()
        .map(|impact| {
            (1..=n)
                .map(|probability| {
                    let level = classify(f64::from(probability), f64::from(impact), dimension);
                    MatrixCell {
                        probability,
                        impact,
                        level,
                        color: level_color(level).to_string(),
                    }
                })
                .collect()
        })
        .collect()
}

/// Grid plus axis labels in display order, ready for a dashboard to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledGrid {
    pub dimension: MatrixDimension,
    /// Impact labels aligned with rows (highest impact first).
    pub row_labels: Vec<String>,
    /// Likelihood labels aligned with columns (lowest first).
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<MatrixCell>>,
}

impl LabeledGrid {
    pub fn from_configuration(config: &MatrixConfiguration) -> Self {
        let dimension = config.dimension();
        Self {
            dimension,
            row_labels: config.impact_labels().iter().rev().cloned().collect(),
            column_labels: config.likelihood_labels().to_vec(),
            cells: generate_grid(dimension),
        }
    }
}
