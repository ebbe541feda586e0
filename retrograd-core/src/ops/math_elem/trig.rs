// retrograd-core/src/ops/math_elem/trig.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{mul_op, neg_op};
use crate::tensor::Tensor;

// --- Sin Definition ---

#[derive(Debug)]
pub(crate) struct Sin;

impl Function for Sin {
    fn name(&self) -> &'static str {
        "Sin"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(f64::sin)])
    }

    /// \\( \frac{dL}{dx} = \frac{dL}{dz} \cdot \cos(x) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let cos_x = cos_op(&ctx.input(0))?;
        Ok(vec![mul_op(&gys[0], &cos_x)?])
    }
}

// --- Cos Definition ---

#[derive(Debug)]
pub(crate) struct Cos;

impl Function for Cos {
    fn name(&self) -> &'static str {
        "Cos"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(f64::cos)])
    }

    /// \\( \frac{dL}{dx} = -\frac{dL}{dz} \cdot \sin(x) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let neg_sin_x = neg_op(&sin_op(&ctx.input(0))?)?;
        Ok(vec![mul_op(&gys[0], &neg_sin_x)?])
    }
}

/// Element-wise sine.
pub fn sin_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Sin, &[*x])
}

/// Element-wise cosine.
pub fn cos_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Cos, &[*x])
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
