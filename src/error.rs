//! Error type shared by mesh generation, scoring, rendering and config loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The point set has no points, so it has no bounding box.
    #[error("Point set is empty; cannot derive a bounding box")]
    EmptyPointSet,
    #[error("Label count {labels} does not match point count {points}")]
    LabelCountMismatch { points: usize, labels: usize },
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    /// The score sequence cannot be reshaped into the mesh grid.
    #[error("Expected {expected} scores (one per mesh point), got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Model shape error: {0}")]
    ModelShape(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type PlotResult<T> = Result<T, PlotError>;
