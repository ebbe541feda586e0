// src/ops/loss/mod.rs

//! # Loss Functions
//!
//! - [`mean_squared_error_op`]: mean of squared differences, reduced to a
//!   rank-0 variable.

pub mod mse;

pub use mse::mean_squared_error_op;
