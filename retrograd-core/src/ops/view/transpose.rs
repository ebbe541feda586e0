// retrograd-core/src/ops/view/transpose.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::tensor::{self, inverse_permutation, Tensor};

/// Axis permutation. `axes == None` reverses all axes.
#[derive(Debug)]
pub(crate) struct Transpose {
    axes: Option<Vec<usize>>,
}

impl Function for Transpose {
    fn name(&self) -> &'static str {
        "Transpose"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![tensor::transpose(xs[0], self.axes.as_deref())?])
    }

    /// Applies the inverse permutation to `gy`.
    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        let gx = match &self.axes {
            None => transpose_op(&gys[0])?,
            Some(axes) => transpose_axes_op(&gys[0], &inverse_permutation(axes))?,
        };
        Ok(vec![gx])
    }
}

/// Reverses the axes of `x` (the matrix transpose for rank 2).
pub fn transpose_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Transpose { axes: None }, &[*x])
}

/// Permutes the axes of `x`: output axis `i` is input axis `axes[i]`.
///
/// # Errors
/// `InvalidPermutation` unless `axes` is a permutation of `0..x.ndim()`.
pub fn transpose_axes_op<'g>(x: &Var<'g>, axes: &[usize]) -> Result<Var<'g>, RetrogradError> {
    invoke_single(
        Transpose {
            axes: Some(axes.to_vec()),
        },
        &[*x],
    )
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
