//! Mesh generation: a regular lattice covering a point set's bounding box plus margin.

pub mod grid_spec;
pub mod mesh;

pub use grid_spec::{AxisRange, GridShape, GridSpec};
pub use mesh::Mesh;

use crate::common_types::Point2;
use crate::error::PlotResult;
use num_traits::Float;

/// Padding added to each side of the bounding box, in data units.
pub const DEFAULT_MARGIN: f64 = 1.0;
/// Distance between neighbouring mesh nodes, `h`.
pub const DEFAULT_STEP: f64 = 0.25;
/// Largest grid a [`GridSpec`] accepts, `4096 * 4096` nodes.
pub const MAX_GRID_NODES: usize = 1 << 24;

/// Builds the evaluation mesh for `points` with the default margin and step.
///
/// The returned mesh carries both the flattened coordinate list
/// ([`Mesh::to_points`]) and the 2D shape needed to reshape scores ([`Mesh::shape`]).
pub fn generate_mesh<F: Float>(points: &[Point2<F>]) -> PlotResult<Mesh<F>> {
    let grid = GridSpec::with_defaults(points)?;
    Ok(Mesh::from_grid(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;

    #[test]
    fn test_generate_mesh_wide_extent_is_an_error() {
        let result = generate_mesh(&[[0.0, 0.0], [1e10, 1e10]]);
        assert!(matches!(result, Err(PlotError::InvalidGrid(_))));
    }

    #[test]
    fn test_generate_mesh_two_point_scenario() {
        let mesh = generate_mesh(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
        assert_eq!(mesh.shape(), GridShape::new(12, 12));
        assert_eq!(mesh.len(), 144);
        assert_eq!(mesh.to_points().len(), mesh.shape().rows * mesh.shape().cols);

        let first = mesh.point(0).unwrap();
        assert_eq!(first, [-1.0, -1.0]);
        let last = mesh.point(143).unwrap();
        assert!((last[0] - 1.75).abs() < 1e-9);
        assert!((last[1] - 1.75).abs() < 1e-9);
        assert!(mesh.point(144).is_none());
    }

    #[test]
    fn test_mesh_is_row_major_outer_y_inner_x() {
        let mesh = generate_mesh(&[[0.0, 0.0], [1.0, 0.5]]).unwrap();
        let shape = mesh.shape();
        // x: [-1, 2) -> 12 columns, y: [-1, 1.5) -> 10 rows
        assert_eq!(shape, GridShape::new(10, 12));

        // Moving one index along advances x; moving one row advances y.
        assert_eq!(mesh.point(1).unwrap(), [-0.75, -1.0]);
        assert_eq!(mesh.point(shape.cols).unwrap(), [-1.0, -0.75]);

        for (row, (xs, ys)) in mesh.xx_rows().zip(mesh.yy_rows()).enumerate() {
            assert_eq!(xs.len(), shape.cols);
            assert!(ys.iter().all(|&y| y == ys[0]), "row {} must share one y", row);
            assert_eq!(xs, mesh.xx_rows().next().unwrap());
        }
        assert_eq!(mesh.xx_rows().count(), shape.rows);
    }

    #[test]
    fn test_points_agree_with_grid_arrays() {
        let mesh = generate_mesh(&[[2.0_f32, -3.0], [2.5, -1.0]]).unwrap();
        for (i, [x, y]) in mesh.points().enumerate() {
            assert_eq!(x, mesh.xx()[i]);
            assert_eq!(y, mesh.yy()[i]);
        }
    }

    #[test]
    fn test_generate_mesh_rejects_empty_point_set() {
        let empty: Vec<[f64; 2]> = Vec::new();
        assert!(matches!(generate_mesh(&empty), Err(PlotError::EmptyPointSet)));
    }
}
