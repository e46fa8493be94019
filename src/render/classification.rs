//! Boolean classification map over the mesh grid.

use crate::error::{PlotError, PlotResult};
use crate::mesh::GridShape;
use num_traits::Float;

/// Thresholds scores at zero: `true` where `score > 0`, in input order.
/// Zero and NaN scores are negative.
pub fn classify<F: Float>(scores: &[F]) -> Vec<bool> {
    scores.iter().map(|&score| score > F::zero()).collect()
}

/// Which mesh cells the model assigns to the positive class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMap {
    shape: GridShape,
    cells: Vec<bool>,
}

impl ClassificationMap {
    /// Classifies `scores` and reshapes them to `shape`.
    /// The score count must equal `shape.rows * shape.cols`.
    pub fn from_scores<F: Float>(scores: &[F], shape: GridShape) -> PlotResult<Self> {
        if scores.len() != shape.len() {
            return Err(PlotError::ScoreCountMismatch {
                expected: shape.len(),
                actual: scores.len(),
            });
        }
        Ok(ClassificationMap { shape, cells: classify(scores) })
    }

    /// Rebuilds a map from its 2D form. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> PlotResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(PlotError::ScoreCountMismatch {
                expected: cols,
                actual: bad.len(),
            });
        }
        let shape = GridShape::new(rows.len(), cols);
        Ok(ClassificationMap {
            shape,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        self.cells.get(self.shape.index(row, col)).copied()
    }

    /// The map in its 2D form, one slice per grid row (per y sample).
    pub fn rows(&self) -> std::slice::Chunks<'_, bool> {
        self.cells.chunks(self.shape.cols.max(1))
    }

    /// The map flattened back to mesh order.
    pub fn as_flat(&self) -> &[bool] {
        &self.cells
    }

    pub fn into_flat(self) -> Vec<bool> {
        self.cells
    }

    /// `(row, col, positive)` for every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let shape = self.shape;
        self.cells.iter().enumerate().map(move |(i, &positive)| {
            let (row, col) = shape.position(i);
            (row, col, positive)
        })
    }

    pub fn positive_count(&self) -> usize {
        self.cells.iter().filter(|&&positive| positive).count()
    }
}
