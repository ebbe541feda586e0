use ndarray::ShapeError;
use thiserror::Error;

/// Custom error type for the retrograd engine.
///
/// Only shape-level failures are represented here. Contract violations
/// (wrong arity, a `backward` returning the wrong number of gradients,
/// mixing variables from two graphs) are programming errors and panic.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum RetrogradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Invalid axis {axis} for tensor of rank {rank} in operation {operation}")]
    InvalidAxis {
        axis: usize,
        rank: usize,
        operation: String,
    },

    #[error("Invalid permutation: axes {axes:?} are not a valid permutation for rank {rank}")]
    InvalidPermutation { axes: Vec<usize>, rank: usize },

    #[error("Expected a single-element tensor, got shape {shape:?}")]
    NotAScalar { shape: Vec<usize> },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Array layout error: {0}")]
    Ndarray(#[from] ShapeError),
}
