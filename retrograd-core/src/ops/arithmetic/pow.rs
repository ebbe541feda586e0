// retrograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{mul_op, mul_scalar_op};
use crate::tensor::Tensor;

// --- Pow Definition ---

/// Raises every element to a constant power.
///
/// The exponent is a plain number rather than a variable, so only the base
/// receives a gradient.
#[derive(Debug)]
pub(crate) struct Pow {
    exponent: f64,
}

impl Function for Pow {
    fn name(&self) -> &'static str {
        "Pow"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let c = self.exponent;
        Ok(vec![xs[0].mapv(|v| v.powf(c))])
    }

    /// \\( \frac{dL}{dx} = c \cdot x^{c-1} \cdot \frac{dL}{dz} \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let x = ctx.input(0);
        let c = self.exponent;
        let local = mul_scalar_op(&pow_op(&x, c - 1.0)?, c)?;
        Ok(vec![mul_op(&local, &gys[0])?])
    }
}

// --- Forward Operation ---

/// Computes `x^exponent` element-wise.
pub fn pow_op<'g>(x: &Var<'g>, exponent: f64) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Pow { exponent }, &[*x])
}

/// Computes `x^2` element-wise.
pub fn square_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    pow_op(x, 2.0)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
