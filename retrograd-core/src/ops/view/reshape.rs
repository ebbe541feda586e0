// retrograd-core/src/ops/view/reshape.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::tensor::{self, Tensor};

/// Reshape to a new shape with the same number of elements.
#[derive(Debug)]
pub(crate) struct Reshape {
    target_shape: Vec<usize>,
    input_shape: Vec<usize>,
}

impl Function for Reshape {
    fn name(&self) -> &'static str {
        "Reshape"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        self.input_shape = xs[0].shape().to_vec();
        Ok(vec![tensor::reshape(xs[0], &self.target_shape)?])
    }

    /// The gradient is `gy` reshaped back to the input shape.
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![reshape_op(&gys[0], &self.input_shape)?])
    }
}

/// Reshapes `x` to `shape`.
///
/// Returns `x` itself, without recording anything, when the shape already
/// matches.
///
/// # Errors
/// `ShapeMismatch` when the element counts differ.
pub fn reshape_op<'g>(x: &Var<'g>, shape: &[usize]) -> Result<Var<'g>, RetrogradError> {
    if x.shape() == shape {
        return Ok(*x);
    }
    let op = Reshape {
        target_shape: shape.to_vec(),
        input_shape: Vec::new(),
    };
    invoke_single(op, &[*x])
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
