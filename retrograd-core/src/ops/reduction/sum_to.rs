// retrograd-core/src/ops/reduction/sum_to.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::view::broadcast_to_op;
use crate::tensor::{self, Tensor};

/// Numpy-style sum-to: the reverse of a broadcast.
#[derive(Debug)]
pub(crate) struct SumTo {
    target_shape: Vec<usize>,
    input_shape: Vec<usize>,
}

impl Function for SumTo {
    fn name(&self) -> &'static str {
        "SumTo"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        self.input_shape = xs[0].shape().to_vec();
        Ok(vec![tensor::sum_to(xs[0], &self.target_shape)?])
    }

    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![broadcast_to_op(&gys[0], &self.input_shape)?])
    }
}

/// Sums `x` down to `shape`; `x` itself comes back when nothing changes.
///
/// # Errors
/// `ShapeMismatch` if `x` is not a broadcast of `shape`.
pub fn sum_to_op<'g>(x: &Var<'g>, shape: &[usize]) -> Result<Var<'g>, RetrogradError> {
    if x.shape() == shape {
        return Ok(*x);
    }
    let op = SumTo {
        target_shape: shape.to_vec(),
        input_shape: Vec::new(),
    };
    invoke_single(op, &[*x])
}

#[cfg(test)]
#[path = "sum_to_test.rs"]
mod tests;
