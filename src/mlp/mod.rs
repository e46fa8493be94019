//! A small multilayer perceptron usable as a decision-boundary scorer.
//!
//! Only the forward pass is provided. Weights come from random initialization
//! or from a serialized, already trained model.

pub mod mlp;

pub use mlp::{Layer, Mlp, Neuron};
