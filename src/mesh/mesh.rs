//! The dense lattice of evaluation coordinates.

use crate::common_types::Point2;
use num_traits::Float;

use super::grid_spec::{GridShape, GridSpec};

/// Two parallel grid arrays `xx` and `yy` of identical shape, stored row-major
/// (outer loop over y, inner loop over x), like a `meshgrid` result.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<F> {
    shape: GridShape,
    xx: Vec<F>,
    yy: Vec<F>,
}

impl<F: Float> Mesh<F> {
    /// Takes the Cartesian product of the two axes of `grid`.
    pub fn from_grid(grid: &GridSpec<F>) -> Self {
        let shape = grid.shape();
        let mut xx = Vec::with_capacity(shape.len());
        let mut yy = Vec::with_capacity(shape.len());
        for y in grid.y().samples() {
            for x in grid.x().samples() {
                xx.push(x);
                yy.push(y);
            }
        }
        Mesh { shape, xx, yy }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of mesh points; always `rows * cols`.
    pub fn len(&self) -> usize {
        self.xx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xx.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Point2<F>> {
        Some([*self.xx.get(index)?, *self.yy.get(index)?])
    }

    /// Mesh points in evaluation order.
    pub fn points(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        self.xx.iter().zip(self.yy.iter()).map(|(&x, &y)| [x, y])
    }

    /// The flattened coordinate list, `[x, y]` pairs in row-major order.
    pub fn to_points(&self) -> Vec<Point2<F>> {
        self.points().collect()
    }

    pub fn xx(&self) -> &[F] {
        &self.xx
    }

    pub fn yy(&self) -> &[F] {
        &self.yy
    }

    /// `xx` viewed as `rows` slices of `cols` values.
    pub fn xx_rows(&self) -> std::slice::Chunks<'_, F> {
        self.xx.chunks(self.shape.cols.max(1))
    }

    /// `yy` viewed as `rows` slices of `cols` values.
    pub fn yy_rows(&self) -> std::slice::Chunks<'_, F> {
        self.yy.chunks(self.shape.cols.max(1))
    }
}
