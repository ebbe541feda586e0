//! # Operator Library (`ops`)
//!
//! Every differentiable operator lives here, grouped by family.
//!
//! ## Structure:
//!
//! - **Operator structs:** each operator is a small struct implementing
//!   [`Function`](crate::autograd::Function). `forward` works on raw tensors and
//!   may record what `backward` needs (input shapes, exponent, axis). The struct
//!   is built fresh for every call, so that state is per invocation.
//! - **`_op` functions:** the public entry point of each operator (`add_op`,
//!   `sum_op`...). It builds the struct and hands it to
//!   [`invoke_single`](crate::autograd::invoke_single).
//! - **Backward in terms of operators:** gradients are computed with these same
//!   `_op` functions on [`Var`](crate::autograd::Var)s, which is what makes
//!   higher-order differentiation work under `create_graph`.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div (broadcasting), neg, pos, pow, the
//!   constant helpers, and the `+ - * /` overloads on `Var`.
//! - [`math_elem`]: sin, cos, tanh, exp.
//! - [`view`]: reshape, transpose, broadcast_to.
//! - [`reduction`]: sum, sum_to.
//! - [`linalg`]: matmul, linear.
//! - [`activation`]: sigmoid, softmax.
//! - [`loss`]: mean squared error.

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod view;

pub use activation::{sigmoid_op, sigmoid_simple_op, softmax_op, softmax_simple_op};
pub use arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, pos_op, pow_op,
    rsub_scalar_op, square_op, sub_op,
};
pub use linalg::{linear_op, linear_simple_op, matmul_op};
pub use loss::mean_squared_error_op;
pub use math_elem::{cos_op, exp_op, sin_op, tanh_op};
pub use reduction::{sum_op, sum_to_op};
pub use view::{broadcast_to_op, reshape_op, transpose_axes_op, transpose_op};
