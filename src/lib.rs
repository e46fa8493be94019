//! Decision-boundary plots for a toy machine-learning playground.
//!
//! A point set defines a [`GridSpec`](mesh::GridSpec): its bounding box padded by a
//! margin and sampled at a fixed step. The mesh over that grid is scored by any
//! [`Scorer`](scoring::Scorer), the scores are thresholded at zero into a
//! [`ClassificationMap`](render::ClassificationMap), and the map is drawn as filled
//! regions under the labelled points.

// Declare the pipeline modules
pub mod common_types;
pub mod config;
pub mod error;
pub mod logging;
pub mod mesh;
pub mod mlp;
pub mod render;
pub mod scoring;

#[cfg(feature = "python")]
mod python;

pub use common_types::{Dataset, Point2};
pub use config::PlotConfig;
pub use error::{PlotError, PlotResult};
pub use mesh::{GridShape, GridSpec, Mesh, generate_mesh};
pub use mlp::Mlp;
pub use render::{ClassificationMap, Figure, classify, plot_decision_boundary, render_regions};
pub use scoring::{LookupScorer, Scorer, evaluate_mesh};
