use crate::error::RetrogradError;
use crate::tensor::Tensor;
use ndarray::{arr0, ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a rank-0 tensor holding `value`.
pub fn scalar(value: f64) -> Tensor {
    arr0(value).into_dyn()
}

/// Creates a tensor from row-major data and a shape.
pub fn from_vec(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Tensor, RetrogradError> {
    let numel: usize = shape.iter().product();
    if data_vec.len() != numel {
        return Err(RetrogradError::TensorCreationError {
            data_len: data_vec.len(),
            shape,
        });
    }
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), data_vec)?)
}

pub fn zeros(shape: &[usize]) -> Tensor {
    ArrayD::zeros(IxDyn(shape))
}

pub fn ones(shape: &[usize]) -> Tensor {
    ArrayD::ones(IxDyn(shape))
}

pub fn zeros_like(tensor: &Tensor) -> Tensor {
    zeros(tensor.shape())
}

/// Ones shaped like `tensor`: the seed gradient dL/dL.
pub fn ones_like(tensor: &Tensor) -> Tensor {
    ones(tensor.shape())
}

// Note: rand and randn use the thread-local RNG; callers wanting
// reproducibility should build tensors with from_vec.

pub fn rand(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.gen::<f64>())
}

pub fn randn(shape: &[usize]) -> Tensor {
    let mut rng = rand::thread_rng();
    ArrayD::from_shape_simple_fn(IxDyn(shape), || StandardNormal.sample(&mut rng))
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
