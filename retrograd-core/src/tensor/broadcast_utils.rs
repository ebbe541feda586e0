use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::{Axis, IxDyn, Zip};

/// Computes the broadcast shape of two shapes following numpy rules.
///
/// Shapes are aligned on their trailing dimensions; each pair of dimensions
/// must be equal or one of them must be 1.
pub fn broadcast_shapes(shape1: &[usize], shape2: &[usize]) -> Result<Vec<usize>, RetrogradError> {
    let rank = shape1.len().max(shape2.len());
    let mut result = vec![0; rank];
    for i in 0..rank {
        let d1 = if i < rank - shape1.len() { 1 } else { shape1[i - (rank - shape1.len())] };
        let d2 = if i < rank - shape2.len() { 1 } else { shape2[i - (rank - shape2.len())] };
        result[i] = if d1 == d2 || d2 == 1 {
            d1
        } else if d1 == 1 {
            d2
        } else {
            return Err(RetrogradError::BroadcastError {
                shape1: shape1.to_vec(),
                shape2: shape2.to_vec(),
            });
        };
    }
    Ok(result)
}

/// Materialises `tensor` broadcast to `shape`.
pub fn broadcast_to(tensor: &Tensor, shape: &[usize]) -> Result<Tensor, RetrogradError> {
    if tensor.shape() == shape {
        return Ok(tensor.clone());
    }
    tensor
        .broadcast(IxDyn(shape))
        .map(|view| view.to_owned())
        .ok_or_else(|| RetrogradError::BroadcastError {
            shape1: tensor.shape().to_vec(),
            shape2: shape.to_vec(),
        })
}

/// Sums `tensor` down to `shape`: the reverse of [`broadcast_to`].
///
/// Leading axes missing from `shape` are summed away, and axes where `shape`
/// has extent 1 are summed with the axis kept.
pub fn sum_to(tensor: &Tensor, shape: &[usize]) -> Result<Tensor, RetrogradError> {
    let current_shape = tensor.shape();
    if current_shape == shape {
        return Ok(tensor.clone());
    }
    let mismatch = || RetrogradError::ShapeMismatch {
        expected: shape.to_vec(),
        actual: current_shape.to_vec(),
        operation: "sum_to".to_string(),
    };
    if current_shape.len() < shape.len() {
        return Err(mismatch());
    }

    let lead = current_shape.len() - shape.len();
    let mut reduced = tensor.clone();
    for _ in 0..lead {
        reduced = reduced.sum_axis(Axis(0));
    }
    for (axis, &target_dim) in shape.iter().enumerate() {
        let dim = reduced.shape()[axis];
        if dim == target_dim {
            continue;
        }
        if target_dim != 1 {
            return Err(mismatch());
        }
        reduced = reduced.sum_axis(Axis(axis)).insert_axis(Axis(axis));
    }
    Ok(reduced)
}

/// Applies `f` elementwise over `a` and `b` broadcast against each other.
pub fn zip_broadcast<F>(a: &Tensor, b: &Tensor, f: F) -> Result<Tensor, RetrogradError>
where
    F: Fn(f64, f64) -> f64,
{
    let shape = broadcast_shapes(a.shape(), b.shape())?;
    let broadcast_error = || RetrogradError::BroadcastError {
        shape1: a.shape().to_vec(),
        shape2: b.shape().to_vec(),
    };
    let a_view = a.broadcast(IxDyn(&shape)).ok_or_else(broadcast_error)?;
    let b_view = b.broadcast(IxDyn(&shape)).ok_or_else(broadcast_error)?;
    Ok(Zip::from(&a_view).and(&b_view).map_collect(|&x, &y| f(x, y)))
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
