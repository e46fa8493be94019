//! The model-evaluation seam: anything that maps a 2D point to a scalar score.

use crate::common_types::Point2;
use crate::mesh::Mesh;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use tracing::debug;

/// A pure `point -> score` function. Positive scores mean the positive class.
pub trait Scorer<F> {
    fn score(&self, point: Point2<F>) -> F;
}

impl<F, T> Scorer<F> for T
where
    T: Fn(Point2<F>) -> F,
{
    fn score(&self, point: Point2<F>) -> F {
        self(point)
    }
}

/// Scores each mesh point in mesh order.
pub fn evaluate_mesh<F, S>(mesh: &Mesh<F>, scorer: &S) -> Vec<F>
where
    F: Float,
    S: Scorer<F> + ?Sized,
{
    let scores: Vec<F> = mesh.points().map(|point| scorer.score(point)).collect();
    debug!(count = scores.len(), "Evaluated scorer over mesh");
    scores
}

type PointKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// A fixed table of scores keyed by exact coordinates.
/// Points missing from the table get the `fallback` score.
#[derive(Debug, Clone)]
pub struct LookupScorer<F> {
    table: HashMap<PointKey, F>,
    fallback: F,
}

impl<F: Float> LookupScorer<F> {
    pub fn new(fallback: F) -> Self {
        LookupScorer { table: HashMap::new(), fallback }
    }

    /// Pairs `points` with `scores` one-to-one; extra entries on either side are ignored.
    pub fn from_pairs(points: &[Point2<F>], scores: &[F], fallback: F) -> Self {
        let mut scorer = Self::new(fallback);
        for (&point, &score) in points.iter().zip(scores.iter()) {
            scorer.insert(point, score);
        }
        scorer
    }

    pub fn insert(&mut self, point: Point2<F>, score: F) -> Option<F> {
        self.table.insert(key(point), score)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<F: Float> Scorer<F> for LookupScorer<F> {
    fn score(&self, point: Point2<F>) -> F {
        self.table.get(&key(point)).copied().unwrap_or(self.fallback)
    }
}

fn key<F: Float>(point: Point2<F>) -> PointKey {
    let [x, y] = point;
    (
        OrderedFloat(x.to_f64().unwrap_or(f64::NAN)),
        OrderedFloat(y.to_f64().unwrap_or(f64::NAN)),
    )
}
