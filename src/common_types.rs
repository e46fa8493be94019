//! This module contains the data structures shared by the mesh generator and the renderer.

use crate::error::{PlotError, PlotResult};
use num_traits::{Float, ToPrimitive};

/// A single 2D coordinate, `[x, y]`.
pub type Point2<F> = [F; 2];

/// A point set paired with one class label per point.
///
/// - `F`: The coordinate type (e.g., `f64`, `f32`).
/// - `L`: The label type (e.g., `i32`, `f64`). Labels are only used to pick scatter colors.
#[derive(Debug, Clone)]
pub struct Dataset<F, L> {
    points: Vec<Point2<F>>,
    labels: Vec<L>,
}

impl<F: Float, L> Dataset<F, L> {
    /// Pairs `points` with `labels`.
    ///
    /// Fails if the point set is empty, if any coordinate is NaN or infinite,
    /// or if the two sequences differ in length.
    pub fn new(points: Vec<Point2<F>>, labels: Vec<L>) -> PlotResult<Self> {
        validate_points(&points)?;
        if points.len() != labels.len() {
            return Err(PlotError::LabelCountMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { points, labels })
    }

    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<F: Float, L: ToPrimitive> Dataset<F, L> {
    /// Labels widened to `f64` for color mapping.
    /// A label with no `f64` representation becomes NaN.
    pub fn labels_f64(&self) -> Vec<f64> {
        self.labels
            .iter()
            .map(|label| label.to_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

/// Checks that a point set can have a bounding box: non-empty, every coordinate finite.
pub(crate) fn validate_points<F: Float>(points: &[Point2<F>]) -> PlotResult<()> {
    if points.is_empty() {
        return Err(PlotError::EmptyPointSet);
    }
    if let Some(index) = points
        .iter()
        .position(|[x, y]| !x.is_finite() || !y.is_finite())
    {
        return Err(PlotError::NonFiniteCoordinate { index });
    }
    Ok(())
}
