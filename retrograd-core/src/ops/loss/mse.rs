// retrograd-core/src/ops/loss/mse.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{mul_op, mul_scalar_op, neg_op, sub_op};
use crate::ops::reduction::sum_to_op;
use crate::ops::view::broadcast_to_op;
use crate::tensor::{zip_broadcast, Tensor};
use ndarray::ArrayD;

// --- MeanSquaredError Definition ---

/// `sum((a - b)^2) / N`, `N` being the element count of the broadcast
/// difference. The output is rank 0.
#[derive(Debug, Default)]
pub(crate) struct MeanSquaredError {
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl Function for MeanSquaredError {
    fn name(&self) -> &'static str {
        "MeanSquaredError"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let (a, b) = (xs[0], xs[1]);
        self.a_shape = a.shape().to_vec();
        self.b_shape = b.shape().to_vec();
        let diff = zip_broadcast(a, b, |x, y| x - y)?;
        let loss = diff.mapv(|d| d * d).sum() / diff.len() as f64;
        Ok(vec![ArrayD::from_elem(ndarray::IxDyn(&[]), loss)])
    }

    /// \\( \frac{dL}{da} = g \cdot (a - b) \cdot \frac{2}{N} \\), and the
    /// negation of that for `b`.
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let diff = sub_op(&ctx.input(0), &ctx.input(1))?;
        let gy = broadcast_to_op(&gys[0], &diff.shape())?;
        let ga = mul_scalar_op(&mul_op(&gy, &diff)?, 2.0 / diff.size() as f64)?;
        let gb = neg_op(&ga)?;
        Ok(vec![sum_to_op(&ga, &self.a_shape)?, sum_to_op(&gb, &self.b_shape)?])
    }
}

// --- Forward Operation ---

/// Mean squared error between `a` and `b`, broadcasting numpy-style.
pub fn mean_squared_error_op<'g>(a: &Var<'g>, b: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(MeanSquaredError::default(), &[*a, *b])
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
