// retrograd-core/src/ops/arithmetic/div.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{mul_op, neg_op, square_op};
use crate::ops::reduction::sum_to_op;
use crate::tensor::{zip_broadcast, Tensor};

// --- Div Definition ---

/// Element-wise division `a / b` with broadcasting.
///
/// Division by zero is not guarded; it yields `inf`/`NaN` per IEEE 754.
#[derive(Debug, Default)]
pub(crate) struct Div {
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl Function for Div {
    fn name(&self) -> &'static str {
        "Div"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let (a, b) = (xs[0], xs[1]);
        self.a_shape = a.shape().to_vec();
        self.b_shape = b.shape().to_vec();
        Ok(vec![zip_broadcast(a, b, |x, y| x / y)?])
    }

    /// \\( \frac{dL}{da} = \frac{dL}{dz} / b \\),
    /// \\( \frac{dL}{db} = \frac{dL}{dz} \cdot (-a / b^2) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        let (a, b) = (ctx.input(0), ctx.input(1));
        let ga = div_op(&gy, &b)?;
        let neg_a_over_b2 = div_op(&neg_op(&a)?, &square_op(&b)?)?;
        let gb = mul_op(&gy, &neg_a_over_b2)?;
        Ok(vec![sum_to_op(&ga, &self.a_shape)?, sum_to_op(&gb, &self.b_shape)?])
    }
}

// --- Forward Operation ---

/// Divides `a` by `b` element-wise, broadcasting numpy-style.
pub fn div_op<'g>(a: &Var<'g>, b: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Div::default(), &[*a, *b])
}

/// Divides every element by a constant.
pub fn div_scalar_op<'g>(a: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    let c = a.graph().constant(value);
    div_op(a, &c)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
