// src/tensor/mod.rs

//! Thin facade over the dense array layer.
//!
//! The engine never implements numeric kernels of its own: every value is an
//! `ndarray::ArrayD<f64>`, and this module only adds the handful of helpers the
//! operators need on top of it (creation, numpy-style broadcasting, sum-to,
//! 2-D matrix product on dynamic-rank arrays).

use crate::error::RetrogradError;
use ndarray::{ArrayD, Ix2, IxDyn};

pub mod broadcast_utils;
pub mod create;

// Re-export creation functions to make them public
pub use broadcast_utils::{broadcast_shapes, broadcast_to, sum_to, zip_broadcast};
pub use create::{from_vec, ones, ones_like, rand, randn, scalar, zeros, zeros_like};

/// The value type carried by every variable.
pub type Tensor = ArrayD<f64>;

/// Returns the single element of `tensor`, whatever its rank.
pub fn item(tensor: &Tensor) -> Result<f64, RetrogradError> {
    if tensor.len() != 1 {
        return Err(RetrogradError::NotAScalar {
            shape: tensor.shape().to_vec(),
        });
    }
    // len() == 1 guarantees an element
    Ok(tensor.iter().next().copied().unwrap_or_default())
}

/// Reshapes `tensor` into `shape`, copying in logical (row-major) order.
pub fn reshape(tensor: &Tensor, shape: &[usize]) -> Result<Tensor, RetrogradError> {
    let numel: usize = shape.iter().product();
    if numel != tensor.len() {
        return Err(RetrogradError::ShapeMismatch {
            expected: tensor.shape().to_vec(),
            actual: shape.to_vec(),
            operation: "reshape (numel mismatch)".to_string(),
        });
    }
    let data: Vec<f64> = tensor.iter().copied().collect();
    Ok(ArrayD::from_shape_vec(IxDyn(shape), data)?)
}

/// Permutes the axes of `tensor`. `None` reverses them.
pub fn transpose(tensor: &Tensor, axes: Option<&[usize]>) -> Result<Tensor, RetrogradError> {
    match axes {
        None => Ok(tensor.t().to_owned()),
        Some(axes) => {
            validate_permutation(axes, tensor.ndim())?;
            Ok(tensor.clone().permuted_axes(IxDyn(axes)).as_standard_layout().to_owned())
        }
    }
}

/// Inverse of the permutation `axes` (argsort).
pub fn inverse_permutation(axes: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; axes.len()];
    for (position, &axis) in axes.iter().enumerate() {
        inverse[axis] = position;
    }
    inverse
}

pub(crate) fn validate_permutation(axes: &[usize], rank: usize) -> Result<(), RetrogradError> {
    let mut seen = vec![false; rank];
    let valid = axes.len() == rank
        && axes.iter().all(|&axis| {
            if axis >= rank || seen[axis] {
                return false;
            }
            seen[axis] = true;
            true
        });
    if valid {
        Ok(())
    } else {
        Err(RetrogradError::InvalidPermutation {
            axes: axes.to_vec(),
            rank,
        })
    }
}

/// Matrix product of two rank-2 tensors.
pub fn matmul(a: &Tensor, b: &Tensor) -> Result<Tensor, RetrogradError> {
    if a.ndim() != 2 || b.ndim() != 2 || a.shape()[1] != b.shape()[0] {
        return Err(RetrogradError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: "matmul".to_string(),
        });
    }
    let a2 = a.view().into_dimensionality::<Ix2>()?;
    let b2 = b.view().into_dimensionality::<Ix2>()?;
    Ok(a2.dot(&b2).into_dyn())
}
