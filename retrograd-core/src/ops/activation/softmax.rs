// retrograd-core/src/ops/activation/softmax.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::{div_op, mul_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::reduction::sum_op;
use crate::tensor::{zip_broadcast, Tensor};
use ndarray::Axis;

// --- Softmax Definition ---

/// Softmax along one axis, shifted by the per-lane maximum before `exp`.
#[derive(Debug)]
pub(crate) struct Softmax {
    axis: usize,
}

impl Function for Softmax {
    fn name(&self) -> &'static str {
        "Softmax"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let x = xs[0];
        if self.axis >= x.ndim() {
            return Err(RetrogradError::InvalidAxis {
                axis: self.axis,
                rank: x.ndim(),
                operation: "softmax".to_string(),
            });
        }
        let axis = Axis(self.axis);
        let max = x
            .map_axis(axis, |lane| lane.fold(f64::NEG_INFINITY, |m, &v| m.max(v)))
            .insert_axis(axis);
        let exps = zip_broadcast(x, &max, |v, m| (v - m).exp())?;
        let sums = exps.sum_axis(axis).insert_axis(axis);
        Ok(vec![zip_broadcast(&exps, &sums, |e, s| e / s)?])
    }

    /// \\( g_x = y \odot g - y \odot \sum_{axis}(y \odot g) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let y = ctx.output(0);
        let gx = mul_op(&y, &gys[0])?;
        let sum_dx = sum_op(&gx, Some(self.axis), true)?;
        Ok(vec![sub_op(&gx, &mul_op(&y, &sum_dx)?)?])
    }
}

// --- Forward Operations ---

/// Softmax along `axis` as a single graph node.
///
/// # Errors
/// `InvalidAxis` if `axis >= x.ndim()`.
pub fn softmax_op<'g>(x: &Var<'g>, axis: usize) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Softmax { axis }, &[*x])
}

/// Unshifted `exp(x) / sum(exp(x))` composed from elementary operators.
pub fn softmax_simple_op<'g>(x: &Var<'g>, axis: usize) -> Result<Var<'g>, RetrogradError> {
    let y = exp_op(x)?;
    let sum_y = sum_op(&y, Some(axis), true)?;
    div_op(&y, &sum_y)
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
