// retrograd-core/src/ops/view/broadcast_to.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::reduction::sum_to_op;
use crate::tensor::{self, Tensor};

/// Materialised numpy-style broadcast.
#[derive(Debug)]
pub(crate) struct BroadcastTo {
    target_shape: Vec<usize>,
    input_shape: Vec<usize>,
}

impl Function for BroadcastTo {
    fn name(&self) -> &'static str {
        "BroadcastTo"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        self.input_shape = xs[0].shape().to_vec();
        Ok(vec![tensor::broadcast_to(xs[0], &self.target_shape)?])
    }

    /// Sums `gy` back over the broadcast axes.
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![sum_to_op(&gys[0], &self.input_shape)?])
    }
}

/// Broadcasts `x` to `shape`; `x` itself comes back when nothing changes.
///
/// # Errors
/// `BroadcastError` if `x` cannot be broadcast to `shape`.
pub fn broadcast_to_op<'g>(x: &Var<'g>, shape: &[usize]) -> Result<Var<'g>, RetrogradError> {
    if x.shape() == shape {
        return Ok(*x);
    }
    let op = BroadcastTo {
        target_shape: shape.to_vec(),
        input_shape: Vec::new(),
    };
    invoke_single(op, &[*x])
}

#[cfg(test)]
#[path = "broadcast_to_test.rs"]
mod tests;
