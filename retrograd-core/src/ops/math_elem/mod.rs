// Element-wise transcendental functions.
pub mod exp;
pub mod tanh;
pub mod trig;

pub use exp::exp_op;
pub use tanh::tanh_op;
pub use trig::{cos_op, sin_op};
