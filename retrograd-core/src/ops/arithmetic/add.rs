// retrograd-core/src/ops/arithmetic/add.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::reduction::sum_to_op;
use crate::tensor::{zip_broadcast, Tensor};

// --- Add Definition ---

/// Element-wise addition with broadcasting.
///
/// Remembers both input shapes so the gradient of a broadcast operand can be
/// summed back to its own shape.
#[derive(Debug, Default)]
pub(crate) struct Add {
    a_shape: Vec<usize>,
    b_shape: Vec<usize>,
}

impl Function for Add {
    fn name(&self) -> &'static str {
        "Add"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let (a, b) = (xs[0], xs[1]);
        self.a_shape = a.shape().to_vec();
        self.b_shape = b.shape().to_vec();
        Ok(vec![zip_broadcast(a, b, |x, y| x + y)?])
    }

    /// \\( \frac{dL}{da} = \frac{dL}{dz} \\), \\( \frac{dL}{db} = \frac{dL}{dz} \\),
    /// each reduced to its input's shape when broadcasting occurred.
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        if self.a_shape == self.b_shape {
            return Ok(vec![gy, gy]);
        }
        Ok(vec![sum_to_op(&gy, &self.a_shape)?, sum_to_op(&gy, &self.b_shape)?])
    }
}

// --- Forward Operation ---

/// Adds two variables element-wise, broadcasting numpy-style.
pub fn add_op<'g>(a: &Var<'g>, b: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Add::default(), &[*a, *b])
}

/// Adds a constant to every element.
pub fn add_scalar_op<'g>(a: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    let c = a.graph().constant(value);
    add_op(a, &c)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
