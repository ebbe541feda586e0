// retrograd-core/src/ops/linalg/linear.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::matmul_op;
use crate::ops::reduction::sum_to_op;
use crate::ops::view::transpose_op;
use crate::tensor::{self, zip_broadcast, Tensor};

// --- Linear Definition ---

/// Fused affine map `x · W + b`. Inputs are `[x, W]` or `[x, W, b]`.
#[derive(Debug, Default)]
pub(crate) struct Linear {
    bias_shape: Option<Vec<usize>>,
}

impl Function for Linear {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        let y = tensor::matmul(xs[0], xs[1])?;
        let y = match xs.get(2) {
            Some(b) => {
                self.bias_shape = Some(b.shape().to_vec());
                zip_broadcast(&y, b, |v, bias| v + bias)?
            }
            None => y,
        };
        Ok(vec![y])
    }

    /// \\( \frac{dL}{dx} = g W^T \\), \\( \frac{dL}{dW} = x^T g \\) and, with a
    /// bias, \\( \frac{dL}{db} = \mathrm{sum\_to}(g, b.shape) \\).
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gy = gys[0];
        let (x, w) = (ctx.input(0), ctx.input(1));
        let mut grads = vec![
            matmul_op(&gy, &transpose_op(&w)?)?,
            matmul_op(&transpose_op(&x)?, &gy)?,
        ];
        if let Some(shape) = &self.bias_shape {
            grads.push(sum_to_op(&gy, shape)?);
        }
        Ok(grads)
    }
}

// --- Forward Operations ---

/// Affine map recorded as a single graph node.
///
/// Without a bias the node has two inputs and produces two gradients.
pub fn linear_op<'g>(x: &Var<'g>, w: &Var<'g>, b: Option<&Var<'g>>) -> Result<Var<'g>, RetrogradError> {
    match b {
        Some(b) => invoke_single(Linear::default(), &[*x, *w, *b]),
        None => invoke_single(Linear::default(), &[*x, *w]),
    }
}

/// Same map as [`linear_op`], composed from `matmul_op` and `add_op`.
pub fn linear_simple_op<'g>(
    x: &Var<'g>,
    w: &Var<'g>,
    b: Option<&Var<'g>>,
) -> Result<Var<'g>, RetrogradError> {
    let t = matmul_op(x, w)?;
    match b {
        Some(b) => add_op(&t, b),
        None => Ok(t),
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
