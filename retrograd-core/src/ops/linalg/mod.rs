// Linear algebra on rank-2 variables.
pub mod linear;
pub mod matmul;

pub use linear::{linear_op, linear_simple_op};
pub use matmul::matmul_op;
