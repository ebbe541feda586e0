// retrograd-core/src/ops/arithmetic/sub.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::neg_op;
use crate::ops::reduction::sum_to_op;
use crate::tensor::{zip_broadcast, Tensor};

// --- Sub Definition ---

/// Element-wise subtraction `a - b` with broadcasting.
#[derive(Debug, Default)]
pub(crate) struct Sub {
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl Function for Sub {
    fn name(&self) -> &'static str {
        "Sub"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let (a, b) = (xs[0], xs[1]);
        self.a_shape = a.shape().to_vec();
        self.b_shape = b.shape().to_vec();
        Ok(vec![zip_broadcast(a, b, |x, y| x - y)?])
    }

    /// \\( \frac{dL}{da} = \frac{dL}{dz} \\), \\( \frac{dL}{db} = -\frac{dL}{dz} \\).
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        let gb = neg_op(&gy)?;
        Ok(vec![sum_to_op(&gy, &self.a_shape)?, sum_to_op(&gb, &self.b_shape)?])
    }
}

// --- Forward Operation ---

/// Subtracts `b` from `a` element-wise, broadcasting numpy-style.
pub fn sub_op<'g>(a: &Var<'g>, b: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Sub::default(), &[*a, *b])
}

/// `value - a`, the reflected form of subtracting a constant.
pub fn rsub_scalar_op<'g>(a: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    let c = a.graph().constant(value);
    sub_op(&c, a)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
