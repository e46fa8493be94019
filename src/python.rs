//! Python bindings, built with the `python` feature.

use std::path::PathBuf;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::common_types::Dataset;
use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::mesh::{GridSpec, generate_mesh};
use crate::render::{classify, render_regions};

impl From<PlotError> for PyErr {
    fn from(err: PlotError) -> Self {
        match err {
            PlotError::Render(_) | PlotError::ConfigRead { .. } => {
                PyRuntimeError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Returns the flattened mesh `[(x, y), ...]` and its `(rows, cols)` shape.
#[pyfunction]
#[pyo3(name = "generate_mesh")]
fn generate_mesh_py(points: Vec<[f64; 2]>) -> PyResult<(Vec<(f64, f64)>, (usize, usize))> {
    let mesh = generate_mesh(&points)?;
    let shape = mesh.shape();
    let coords = mesh.points().map(|[x, y]| (x, y)).collect();
    Ok((coords, (shape.rows, shape.cols)))
}

/// `score > 0` for every score, in order.
#[pyfunction]
#[pyo3(name = "classification_map")]
fn classification_map_py(scores: Vec<f64>) -> Vec<bool> {
    classify(&scores)
}

/// Renders the plot to `path`. A `.svg` extension writes SVG; anything else goes
/// through the bitmap encoder chosen by the extension.
#[pyfunction]
#[pyo3(
    name = "render_decision_boundary",
    signature = (points, labels, scores, path, width = 640, height = 480)
)]
fn render_decision_boundary_py(
    points: Vec<[f64; 2]>,
    labels: Vec<f64>,
    scores: Vec<f64>,
    path: PathBuf,
    width: u32,
    height: u32,
) -> PyResult<()> {
    let config = PlotConfig { width, height, ..PlotConfig::default() };
    let dataset = Dataset::new(points, labels)?;
    let grid = GridSpec::from_points(dataset.points(), config.margin, config.step)?;
    let figure = render_regions(&dataset, &scores, &grid, &config)?;

    if path.extension().is_some_and(|ext| ext == "svg") {
        figure.render_svg(&path)?;
    } else {
        figure.render_bitmap(&path)?;
    }
    Ok(())
}

/// The `decision_boundary` Python module. The function name must match `lib.name` in Cargo.toml.
#[pymodule]
fn decision_boundary(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // A host that already installed a subscriber keeps it.
    let _ = crate::logging::init();
    m.add_function(wrap_pyfunction!(generate_mesh_py, m)?)?;
    m.add_function(wrap_pyfunction!(classification_map_py, m)?)?;
    m.add_function(wrap_pyfunction!(render_decision_boundary_py, m)?)?;
    Ok(())
}
