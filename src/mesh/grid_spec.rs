//! Bounding box, step and shape of the evaluation grid.
//!
//! A `GridSpec` is derived once from a point set and shared by the mesh
//! generator and the region renderer, so both always agree on the lattice.

use crate::common_types::{Point2, validate_points};
use crate::error::{PlotError, PlotResult};
use num_traits::Float;
use tracing::debug;

use super::{DEFAULT_MARGIN, DEFAULT_STEP, MAX_GRID_NODES};

/// Samples of one axis over the half-open interval `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange<F> {
    pub start: F,
    pub stop: F,
    pub step: F,
    len: usize,
}

impl<F: Float> AxisRange<F> {
    /// Samples `[start, stop)` at `step`: `ceil((stop - start) / step)` samples,
    /// sample `i` sitting at `start + i * step`. The upper bound is never included.
    pub fn new(start: F, stop: F, step: F) -> PlotResult<Self> {
        if !step.is_finite() || step <= F::zero() {
            return Err(PlotError::InvalidGrid(
                "step must be positive and finite".to_string(),
            ));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(PlotError::InvalidGrid(
                "axis bounds must be finite".to_string(),
            ));
        }
        let count = ((stop - start) / step).ceil();
        if !(count > F::zero()) {
            return Err(PlotError::InvalidGrid(
                "axis range holds no samples; increase the margin".to_string(),
            ));
        }
        let len = count.to_usize().ok_or_else(|| {
            PlotError::InvalidGrid("axis range holds too many samples".to_string())
        })?;
        Ok(AxisRange { start, stop, step, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coordinate of sample `index`. Indices past the end extrapolate.
    pub fn value(&self, index: usize) -> F {
        let i: F = F::from(index).unwrap_or_else(F::nan);
        self.start + i * self.step
    }

    /// The lowest sample, always equal to `start`.
    pub fn first(&self) -> F {
        self.start
    }

    /// The highest sample. Lies in `[stop - step, stop)`.
    pub fn last(&self) -> F {
        self.value(self.len - 1)
    }

    pub fn samples(&self) -> impl Iterator<Item = F> {
        let axis = *self;
        (0..axis.len).map(move |i| axis.value(i))
    }
}

/// Shape of the 2D grid: one row per y sample, one column per x sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        GridShape { rows, cols }
    }

    /// Number of grid nodes, `rows * cols`. Saturates at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major flat index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Inverse of [`GridShape::index`].
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// The bounding box of a point set expanded by a margin, sampled at a fixed step.
/// Never holds more than [`MAX_GRID_NODES`] nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec<F> {
    x: AxisRange<F>,
    y: AxisRange<F>,
}

impl<F: Float> GridSpec<F> {
    pub fn new(x: AxisRange<F>, y: AxisRange<F>) -> PlotResult<Self> {
        let nodes = x.len().checked_mul(y.len()).filter(|&n| n <= MAX_GRID_NODES);
        if nodes.is_none() {
            return Err(PlotError::InvalidGrid(format!(
                "{} x {} grid exceeds {} nodes; increase the step",
                y.len(),
                x.len(),
                MAX_GRID_NODES
            )));
        }
        Ok(GridSpec { x, y })
    }

    /// Derives the grid from `points`:
    /// `[min(X[:,k]) - margin, max(X[:,k]) + margin)` on each axis, sampled at `step`.
    pub fn from_points(points: &[Point2<F>], margin: F, step: F) -> PlotResult<Self> {
        validate_points(points)?;
        if !margin.is_finite() || margin < F::zero() {
            return Err(PlotError::InvalidGrid(
                "margin must be finite and non-negative".to_string(),
            ));
        }

        let (lower, upper) = bounding_box(points);
        let x = AxisRange::new(lower[0] - margin, upper[0] + margin, step)?;
        let y = AxisRange::new(lower[1] - margin, upper[1] + margin, step)?;

        let spec = GridSpec::new(x, y)?;
        let shape = spec.shape();
        debug!(rows = shape.rows, cols = shape.cols, points = points.len(), "Derived grid spec");
        Ok(spec)
    }

    /// Grid with the playground defaults: margin `1.0`, step `0.25`.
    pub fn with_defaults(points: &[Point2<F>]) -> PlotResult<Self> {
        let margin = F::from(DEFAULT_MARGIN)
            .ok_or_else(|| PlotError::InvalidGrid("margin not representable".to_string()))?;
        let step = F::from(DEFAULT_STEP)
            .ok_or_else(|| PlotError::InvalidGrid("step not representable".to_string()))?;
        Self::from_points(points, margin, step)
    }

    pub fn x(&self) -> &AxisRange<F> {
        &self.x
    }

    pub fn y(&self) -> &AxisRange<F> {
        &self.y
    }

    pub fn shape(&self) -> GridShape {
        GridShape::new(self.y.len(), self.x.len())
    }
}

/// Componentwise minimum and maximum. `points` must be non-empty and finite.
fn bounding_box<F: Float>(points: &[Point2<F>]) -> (Point2<F>, Point2<F>) {
    let init = ([F::infinity(), F::infinity()], [F::neg_infinity(), F::neg_infinity()]);
    points.iter().fold(init, |(lower, upper), p| {
        (
            [lower[0].min(p[0]), lower[1].min(p[1])],
            [upper[0].max(p[0]), upper[1].max(p[1])],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_axis_range_follows_arange_semantics() {
        let axis = AxisRange::new(-1.0, 2.0, 0.25).unwrap();
        assert_eq!(axis.len(), 12);
        assert_eq!(axis.first(), -1.0);
        assert!((axis.last() - 1.75).abs() < EPS);
        // Upper bound is excluded.
        assert!(axis.samples().all(|v| v < 2.0));

        // A range that is not a whole number of steps rounds the count up.
        let axis = AxisRange::new(0.0, 1.1, 0.25).unwrap();
        assert_eq!(axis.len(), 5);
        assert!((axis.last() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_axis_range_rejects_bad_steps() {
        assert!(matches!(AxisRange::new(0.0, 1.0, 0.0), Err(PlotError::InvalidGrid(_))));
        assert!(matches!(AxisRange::new(0.0, 1.0, -0.5), Err(PlotError::InvalidGrid(_))));
        assert!(matches!(AxisRange::new(0.0, 1.0, f64::NAN), Err(PlotError::InvalidGrid(_))));
        // Empty interval.
        assert!(matches!(AxisRange::new(1.0, 1.0, 0.25), Err(PlotError::InvalidGrid(_))));
    }

    #[test]
    fn test_grid_spec_two_point_scenario() {
        let spec = GridSpec::with_defaults(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
        assert_eq!(spec.x().start, -1.0);
        assert_eq!(spec.x().stop, 2.0);
        assert_eq!(spec.y().start, -1.0);
        assert_eq!(spec.y().stop, 2.0);
        assert_eq!(spec.shape(), GridShape::new(12, 12));
        assert_eq!(spec.shape().len(), 144);
    }

    #[test]
    fn test_grid_spec_bounds_hold_for_assorted_point_sets() {
        let point_sets: Vec<Vec<[f64; 2]>> = vec![
            vec![[3.3, -7.1]],
            vec![[0.1, 0.2], [-4.05, 9.9], [2.7, 3.14]],
            vec![[-0.5, 0.5], [0.5, -0.5], [0.0, 0.0], [1e-3, 12.345]],
        ];
        let h = 0.25;
        for points in point_sets {
            let spec = GridSpec::with_defaults(&points).unwrap();
            let x_min = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
            let x_max = points.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);
            let y_min = points.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
            let y_max = points.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);

            assert_eq!(spec.x().first(), x_min - 1.0);
            assert_eq!(spec.y().first(), y_min - 1.0);
            assert!(spec.x().last() >= x_max + 1.0 - h - EPS, "x upper bound too low for {:?}", points);
            assert!(spec.y().last() >= y_max + 1.0 - h - EPS, "y upper bound too low for {:?}", points);
        }
    }

    #[test]
    fn test_grid_spec_custom_margin_and_step() {
        let spec = GridSpec::from_points(&[[0.0_f32, 0.0], [2.0, 1.0]], 0.5, 0.5).unwrap();
        // x: [-0.5, 2.5) -> 6 samples, y: [-0.5, 1.5) -> 4 samples
        assert_eq!(spec.shape(), GridShape::new(4, 6));
    }

    #[test]
    fn test_grid_spec_rejects_invalid_inputs() {
        let empty: [[f64; 2]; 0] = [];
        assert!(matches!(GridSpec::with_defaults(&empty), Err(PlotError::EmptyPointSet)));
        assert!(matches!(
            GridSpec::from_points(&[[0.0, 0.0]], -1.0, 0.25),
            Err(PlotError::InvalidGrid(_))
        ));
        // Zero margin around a single point leaves nothing to sample.
        assert!(matches!(
            GridSpec::from_points(&[[0.0, 0.0]], 0.0, 0.25),
            Err(PlotError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_grid_spec_rejects_wide_extent() {
        // Overflows `rows * cols`.
        let result = GridSpec::with_defaults(&[[0.0, 0.0], [1e10, 1e10]]);
        assert!(matches!(result, Err(PlotError::InvalidGrid(_))));

        // Fits in `usize` but is far past the node cap.
        let result = GridSpec::with_defaults(&[[0.0, 0.0], [1e5, 1e5]]);
        assert!(matches!(result, Err(PlotError::InvalidGrid(_))));

        // Same extent with a coarse step is fine.
        let spec = GridSpec::from_points(&[[0.0, 0.0], [1e5, 1e5]], 1.0, 100.0).unwrap();
        assert!(spec.shape().len() <= MAX_GRID_NODES);
    }

    #[test]
    fn test_grid_spec_new_checks_node_count() {
        let wide = AxisRange::new(0.0, 1e12, 1.0).unwrap();
        let narrow = AxisRange::new(0.0, 3.0, 1.0).unwrap();
        assert!(matches!(GridSpec::new(wide, wide), Err(PlotError::InvalidGrid(_))));
        assert_eq!(GridSpec::new(narrow, narrow).unwrap().shape(), GridShape::new(3, 3));
    }

    #[test]
    fn test_grid_shape_len_saturates() {
        assert_eq!(GridShape::new(usize::MAX, 2).len(), usize::MAX);
    }

    #[test]
    fn test_grid_shape_index_round_trip() {
        let shape = GridShape::new(3, 5);
        for index in 0..shape.len() {
            let (row, col) = shape.position(index);
            assert!(row < 3 && col < 5);
            assert_eq!(shape.index(row, col), index);
        }
    }
}
