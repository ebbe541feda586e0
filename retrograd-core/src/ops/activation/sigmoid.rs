// retrograd-core/src/ops/activation/sigmoid.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{add_scalar_op, div_op, mul_op, neg_op, rsub_scalar_op};
use crate::ops::math_elem::exp_op;
use crate::tensor::Tensor;

// --- Sigmoid Definition ---

/// Logistic sigmoid, evaluated as `tanh(x / 2) / 2 + 1/2` so large negative
/// inputs never overflow `exp`.
#[derive(Debug)]
pub(crate) struct Sigmoid;

impl Function for Sigmoid {
    fn name(&self) -> &'static str {
        "Sigmoid"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(|v| (v * 0.5).tanh() * 0.5 + 0.5)])
    }

    /// \\( \frac{dL}{dx} = \frac{dL}{dy} \cdot y (1 - y) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let y = ctx.output(0);
        let local = mul_op(&y, &rsub_scalar_op(&y, 1.0)?)?;
        Ok(vec![mul_op(&gys[0], &local)?])
    }
}

// --- Forward Operations ---

/// Element-wise logistic sigmoid as a single graph node.
pub fn sigmoid_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Sigmoid, &[*x])
}

/// `1 / (1 + exp(-x))` composed from elementary operators.
pub fn sigmoid_simple_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    let one = x.graph().constant(1.0);
    let denominator = add_scalar_op(&exp_op(&neg_op(x)?)?, 1.0)?;
    div_op(&one, &denominator)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
