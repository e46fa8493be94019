//! Region rendering: classify mesh scores and draw them under the labelled points.

pub mod classification;
pub mod colormap;
pub mod figure;

pub use classification::{ClassificationMap, classify};
pub use figure::{Figure, FigureStyle};

use num_traits::{AsPrimitive, Float, ToPrimitive};
use tracing::debug;

use crate::common_types::Dataset;
use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::mesh::{GridSpec, Mesh};
use crate::scoring::{Scorer, evaluate_mesh};

/// Builds the figure for precomputed `scores`, one per node of `grid` in mesh order.
///
/// Fails with [`PlotError::ScoreCountMismatch`] when the scores cannot be
/// reshaped into the grid.
pub fn render_regions<F, L>(
    dataset: &Dataset<F, L>,
    scores: &[F],
    grid: &GridSpec<F>,
    config: &PlotConfig,
) -> PlotResult<Figure>
where
    F: Float + AsPrimitive<f64>,
    L: ToPrimitive,
{
    config.validate()?;
    let map = ClassificationMap::from_scores(scores, grid.shape())?;
    debug!(
        positive = map.positive_count(),
        total = scores.len(),
        "Classified mesh scores"
    );
    Ok(Figure::new(grid, map, dataset, FigureStyle::from(config)))
}

/// The whole pipeline: one grid spec, the mesh over it, the scorer at every
/// mesh point, then the figure.
pub fn plot_decision_boundary<F, L, S>(
    dataset: &Dataset<F, L>,
    scorer: &S,
    config: &PlotConfig,
) -> PlotResult<Figure>
where
    F: Float + AsPrimitive<f64>,
    L: ToPrimitive,
    S: Scorer<F> + ?Sized,
{
    config.validate()?;
    let margin = F::from(config.margin)
        .ok_or_else(|| PlotError::InvalidConfig("margin not representable".to_string()))?;
    let step = F::from(config.step)
        .ok_or_else(|| PlotError::InvalidConfig("step not representable".to_string()))?;

    let grid = GridSpec::from_points(dataset.points(), margin, step)?;
    let mesh = Mesh::from_grid(&grid);
    let scores = evaluate_mesh(&mesh, scorer);
    render_regions(dataset, &scores, &grid, config)
}
