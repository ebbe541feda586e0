// retrograd-core/src/ops/math_elem/exp.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::mul_op;
use crate::tensor::Tensor;

#[derive(Debug)]
pub(crate) struct Exp;

impl Function for Exp {
    fn name(&self) -> &'static str {
        "Exp"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(f64::exp)])
    }

    /// \\( \frac{dL}{dx} = \frac{dL}{dz} \cdot e^x \\), reusing the output.
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![mul_op(&gys[0], &ctx.output(0))?])
    }
}

/// Element-wise natural exponential.
pub fn exp_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Exp, &[*x])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
