// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! - [`sigmoid_op`]: logistic sigmoid, plus [`sigmoid_simple_op`] built from
//!   elementary operators.
//! - [`softmax_op`]: softmax along one axis, plus [`softmax_simple_op`].

pub mod sigmoid;
pub mod softmax;

pub use sigmoid::{sigmoid_op, sigmoid_simple_op};
pub use softmax::{softmax_op, softmax_simple_op};
