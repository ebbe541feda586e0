// retrograd-core/src/ops/math_elem/tanh.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{mul_op, rsub_scalar_op, square_op};
use crate::tensor::Tensor;

/// Hyperbolic tangent. Backward is expressed through the saved output.
#[derive(Debug)]
pub(crate) struct Tanh;

impl Function for Tanh {
    fn name(&self) -> &'static str {
        "Tanh"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(f64::tanh)])
    }

    /// \\( \frac{dL}{dx} = \frac{dL}{dz} \cdot (1 - z^2) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let y = ctx.output(0);
        let local = rsub_scalar_op(&square_op(&y)?, 1.0)?;
        Ok(vec![mul_op(&gys[0], &local)?])
    }
}

/// Element-wise hyperbolic tangent.
pub fn tanh_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Tanh, &[*x])
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
