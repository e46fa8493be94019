//! Core multilayer perceptron structures, forward pass only.

use std::fmt;

use num_traits::Float;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::common_types::Point2;
use crate::error::{PlotError, PlotResult};
use crate::scoring::Scorer;

/// A single unit: weighted sum of its inputs plus a bias, optionally through a ReLU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron<F> {
    pub weights: Vec<F>,
    pub bias: F,
    /// Apply ReLU to the activation.
    pub nonlin: bool,
}

impl<F: Float> Neuron<F> {
    /// Weights drawn uniformly from `[-1, 1]`, bias zero.
    pub fn new(nin: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nonlin, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nonlin: bool, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|_| {
                let w: f64 = rng.gen_range(-1.0..=1.0);
                F::from(w).unwrap_or_else(F::zero)
            })
            .collect();
        Neuron { weights, bias: F::zero(), nonlin }
    }

    pub fn from_parts(weights: Vec<F>, bias: F, nonlin: bool) -> Self {
        Neuron { weights, bias, nonlin }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Inputs beyond `nin` are ignored; missing inputs contribute nothing.
    pub fn eval(&self, x: &[F]) -> F {
        let act = self
            .weights
            .iter()
            .zip(x.iter())
            .fold(self.bias, |acc, (&w, &xi)| acc + w * xi);
        if self.nonlin { act.max(F::zero()) } else { act }
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + 1
    }
}

impl<F> fmt::Display for Neuron<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

/// `nout` independent neurons reading the same `nin` inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<F> {
    pub neurons: Vec<Neuron<F>>,
}

impl<F: Float> Layer<F> {
    pub fn new(nin: usize, nout: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nout, nonlin, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nout: usize, nonlin: bool, rng: &mut R) -> Self {
        Layer {
            neurons: (0..nout).map(|_| Neuron::with_rng(nin, nonlin, &mut *rng)).collect(),
        }
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn eval(&self, x: &[F]) -> Vec<F> {
        self.neurons.iter().map(|n| n.eval(x)).collect()
    }

    pub fn parameter_count(&self) -> usize {
        self.neurons.iter().map(Neuron::parameter_count).sum()
    }
}

impl<F> fmt::Display for Layer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of: [")?;
        write_joined(f, &self.neurons)?;
        write!(f, "]")
    }
}

/// A stack of layers; every layer but the last applies ReLU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mlp<F> {
    pub layers: Vec<Layer<F>>,
}

impl<F: Float> Mlp<F> {
    /// Layer sizes are `[nin] + nouts`, e.g. `Mlp::new(2, &[16, 16, 1])`.
    pub fn new(nin: usize, nouts: &[usize]) -> PlotResult<Self> {
        Self::with_rng(nin, nouts, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> PlotResult<Self> {
        if nin == 0 {
            return Err(PlotError::ModelShape("input width must be positive".to_string()));
        }
        if nouts.is_empty() || nouts.contains(&0) {
            return Err(PlotError::ModelShape(format!(
                "layer widths must be non-empty and positive, got {:?}",
                nouts
            )));
        }

        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let last = nouts.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Layer::with_rng(pair[0], pair[1], i != last, &mut *rng))
            .collect();
        Ok(Mlp { layers })
    }

    /// Wraps pre-trained layers after checking that consecutive widths line up.
    pub fn from_layers(layers: Vec<Layer<F>>) -> PlotResult<Self> {
        let mlp = Mlp { layers };
        mlp.validate()?;
        Ok(mlp)
    }

    pub fn validate(&self) -> PlotResult<()> {
        let first = self
            .layers
            .first()
            .ok_or_else(|| PlotError::ModelShape("model has no layers".to_string()))?;
        let mut width = first.nin();
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.neurons.is_empty() {
                return Err(PlotError::ModelShape(format!("layer {} has no neurons", i)));
            }
            if let Some(bad) = layer.neurons.iter().find(|n| n.nin() != width) {
                return Err(PlotError::ModelShape(format!(
                    "layer {} expects {} inputs but has a neuron with {}",
                    i,
                    width,
                    bad.nin()
                )));
            }
            width = layer.nout();
        }
        Ok(())
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn eval(&self, x: &[F]) -> Vec<F> {
        self.layers
            .iter()
            .fold(x.to_vec(), |out, layer| layer.eval(&out))
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Layer::parameter_count).sum()
    }
}

/// The first output is the decision score.
impl<F: Float> Scorer<F> for Mlp<F> {
    fn score(&self, point: Point2<F>) -> F {
        self.eval(&point).first().copied().unwrap_or_else(F::zero)
    }
}

impl<F> fmt::Display for Mlp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Model of: [")?;
        write_joined(f, &self.layers)?;
        write!(f, "]")
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    // Every item, the last included, is followed by ", ".
    for item in items {
        write!(f, "{}, ", item)?;
    }
    Ok(())
}
