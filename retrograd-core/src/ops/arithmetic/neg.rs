// retrograd-core/src/ops/arithmetic/neg.rs

use crate::autograd::{invoke_single, BackwardContext, Function, Var};
use crate::error::RetrogradError;
use crate::tensor::Tensor;

/// Unary negation.
#[derive(Debug)]
pub(crate) struct Neg;

impl Function for Neg {
    fn name(&self) -> &'static str {
        "Neg"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].mapv(|v| -v)])
    }

    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![neg_op(&gys[0])?])
    }
}

/// Unary plus. The output is a fresh variable holding a copy of the input.
#[derive(Debug)]
pub(crate) struct Pos;

impl Function for Pos {
    fn name(&self) -> &'static str {
        "Pos"
    }

    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError> {
        Ok(vec![xs[0].clone()])
    }

    fn backward<'g>(
        &self,
        _ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError> {
        Ok(vec![gys[0]])
    }
}

/// Negates every element.
pub fn neg_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Neg, &[*x])
}

/// Identity with its own graph node.
pub fn pos_op<'g>(x: &Var<'g>) -> Result<Var<'g>, RetrogradError> {
    invoke_single(Pos, &[*x])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
