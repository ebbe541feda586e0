// retrograd-core/src/ops/reduction/sum.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::view::{broadcast_to_op, reshape_op};
use crate::tensor::Tensor;
use ndarray::{ArrayD, Axis, IxDyn};

// --- Sum Definition ---

/// Sum over one axis, or over every element when `axis` is `None`.
#[derive(Debug)]
pub(crate) struct Sum {
    axis: Option<usize>,
    keepdims: bool,
    input_shape: Vec<usize>,
}

impl Sum {
    /// Output shape as if `keepdims` were set: reduced axes become 1.
    fn kept_shape(&self) -> Vec<usize> {
        match self.axis {
            None => vec![1; self.input_shape.len()],
            Some(axis) => {
                let mut shape = self.input_shape.clone();
                shape[axis] = 1;
                shape
            }
        }
    }
}

impl Function for Sum {
    fn name(&self) -> &'static str {
        "Sum"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let x = xs[0];
        self.input_shape = x.shape().to_vec();
        let result = match self.axis {
            None => {
                let total = x.sum();
                if self.keepdims {
                    ArrayD::from_elem(IxDyn(&self.kept_shape()), total)
                } else {
                    ArrayD::from_elem(IxDyn(&[]), total)
                }
            }
            Some(axis) => {
                if axis >= x.ndim() {
                    return Err(RetrogradError::InvalidAxis {
                        axis,
                        rank: x.ndim(),
                        operation: "sum".to_string(),
                    });
                }
                let reduced = x.sum_axis(Axis(axis));
                if self.keepdims {
                    reduced.insert_axis(Axis(axis))
                } else {
                    reduced
                }
            }
        };
        Ok(vec![result])
    }

    /// Every input element contributed once, so `gy` is reshaped to the
    /// kept-dims shape and broadcast back over the reduced axes.
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = reshape_op(&gys[0], &self.kept_shape())?;
        Ok(vec![broadcast_to_op(&gy, &self.input_shape)?])
    }
}

// --- Forward Operation ---

/// Sums `x` along `axis`, or over all elements when `axis` is `None`.
///
/// With `keepdims` the reduced axes stay in the result with extent 1.
///
/// # Errors
/// `InvalidAxis` if `axis >= x.ndim()`.
pub fn sum_op<'g>(x: &Var<'g>, axis: Option<usize>, keepdims: bool) -> Result<Var<'g>, RetrogradError> {
    let op = Sum {
        axis,
        keepdims,
        input_shape: Vec::new(),
    };
    invoke_single(op, &[*x])
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
