// retrograd-core/src/ops/linalg/matmul.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::view::transpose_op;
use crate::tensor::{self, Tensor};

// --- MatMul Definition ---

/// 2-D matrix product `x · W`.
#[derive(Debug)]
pub(crate) struct MatMul;

impl Function for MatMul {
    fn name(&self) -> &'static str {
        "MatMul"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![tensor::matmul(xs[0], xs[1])?])
    }

    /// \\( \frac{dL}{dx} = \frac{dL}{dy} W^T \\), \\( \frac{dL}{dW} = x^T \frac{dL}{dy} \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        let (x, w) = (ctx.input(0), ctx.input(1));
        let gx = matmul_op(&gy, &transpose_op(&w)?)?;
        let gw = matmul_op(&transpose_op(&x)?, &gy)?;
        Ok(vec![gx, gw])
    }
}

// --- Forward Operation ---

/// Matrix product of two rank-2 variables.
///
/// # Errors
/// `ShapeMismatch` if either operand is not rank 2 or the inner dimensions
/// differ.
pub fn matmul_op<'g>(x: &Var<'g>, w: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(MatMul, &[*x, *w])
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
