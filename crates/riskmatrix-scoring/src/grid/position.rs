use serde::{Deserialize, Serialize};

use riskmatrix_core::models::MatrixDimension;

use crate::classifier::round_and_clamp;

/// Zero-based grid coordinates: `x` is the column, `y` the row (row 0 is
/// the highest impact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub x: usize,
    pub y: usize,
}

/// Locate the cell a score pair falls on, using the classifier's rounding.
pub fn locate_cell(probability: f64, impact: f64, dimension: MatrixDimension) -> CellPosition {
    let p = round_and_clamp(probability, dimension);
    let i = round_and_clamp(impact, dimension);
    CellPosition {
        x: usize::from(p) - 1,
        y: usize::from(dimension.size() - i),
    }
}

/// Count how many `(probability, impact)` score pairs fall on each cell,
/// laid out like [`generate_grid`](super::generate_grid).
pub fn heatmap(
    dimension: MatrixDimension,
    points: impl IntoIterator<Item = (f64, f64)>,
) -> Vec<Vec<usize>> {
    let n = usize::from(dimension.size());
    let mut counts = vec![vec![0usize; n]; n];
    for (probability, impact) in points {
        let pos = locate_cell(probability, impact, dimension);
        counts[pos.y][pos.x] += 1;
    }
    counts
}
