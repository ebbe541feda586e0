//! # retrograd-core
//!
//! A define-by-run reverse-mode automatic differentiation engine.
//!
//! Computations are recorded into a [`Graph`] while they run: every operator
//! call on [`Var`]s appends a function node linking its inputs to its outputs.
//! Calling [`Var::backward`] on a result walks that graph in reverse
//! generation order and leaves a gradient on every ancestor. Gradients are
//! themselves variables, so with `create_graph` they can be differentiated
//! again.
//!
//! ```
//! use retrograd_core::{ops, Graph};
//!
//! let graph = Graph::new();
//! let x = graph.scalar(2.0);
//! let y = ops::pow_op(&x, 3.0)?;
//! y.backward()?;
//! assert_eq!(x.grad().unwrap().item()?, 12.0);
//! # Ok::<(), retrograd_core::RetrogradError>(())
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod utils;

pub use autograd::{BackwardContext, Function, FunctionRef, Graph, GraphMark, Var};
pub use config::{Config, ConfigGuard, Flag};
pub use error::RetrogradError;
pub use tensor::Tensor;
