// retrograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::reduction::sum_to_op;
use crate::tensor::{zip_broadcast, Tensor};

// --- Mul Definition ---

/// Element-wise multiplication with broadcasting.
///
/// Backward reads both operands back from the context, so nothing but the
/// input shapes is stored here.
#[derive(Debug, Default)]
pub(crate) struct Mul {
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl Function for Mul {
    fn name(&self) -> &'static str {
        "Mul"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let (a, b) = (xs[0], xs[1]);
        self.a_shape = a.shape().to_vec();
        self.b_shape = b.shape().to_vec();
        Ok(vec![zip_broadcast(a, b, |x, y| x * y)?])
    }

    /// \\( \frac{dL}{da} = \frac{dL}{dz} \cdot b \\), \\( \frac{dL}{db} = \frac{dL}{dz} \cdot a \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        let (a, b) = (ctx.input(0), ctx.input(1));
        let ga = mul_op(&gy, &b)?;
        let gb = mul_op(&gy, &a)?;
        Ok(vec![sum_to_op(&ga, &self.a_shape)?, sum_to_op(&gb, &self.b_shape)?])
    }
}

// --- Forward Operation ---

/// Multiplies two variables element-wise, broadcasting numpy-style.
pub fn mul_op<'g>(a: &Var<'g>, b: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Mul::default(), &[*a, *b])
}

/// Multiplies every element by a constant.
pub fn mul_scalar_op<'g>(a: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    let c = a.graph().constant(value);
    mul_op(a, &c)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
