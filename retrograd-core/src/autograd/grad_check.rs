use crate::autograd::graph::Graph;
use crate::autograd::variable::Var;
use crate::error::RetrogradError;
use crate::ops::reduction::sum_op;
use crate::tensor::{from_vec, Tensor};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(RetrogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(RetrogradError),
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(#[from] RetrogradError),
    #[error("Input tensor {input_index} has no gradient after the backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated on leaf variables built from `inputs`; its output is
/// reduced with `sum` to a scalar loss. For every element of every input the
/// gradient from `backward()` must match `(L(x + eps) - L(x - eps)) / (2 eps)`
/// within `tolerance` (absolute or relative).
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&[Var<'g>]) -> Result<Var<'g>, RetrogradError>,
{
    let analytical_grads = analytical_gradients(&func, inputs)?;

    for (i, original_input) in inputs.iter().enumerate() {
        let shape = original_input.shape().to_vec();
        let original_data: Vec<f64> = original_input.iter().copied().collect();
        let analytical_data: Vec<f64> = analytical_grads[i].iter().copied().collect();

        for elem_idx in 0..original_data.len() {
            let mut perturbed = inputs.to_vec();

            let mut data_plus = original_data.clone();
            data_plus[elem_idx] += epsilon;
            perturbed[i] = from_vec(data_plus, shape.clone())?;
            let loss_plus = evaluate_loss(&func, &perturbed)?;

            let mut data_minus = original_data.clone();
            data_minus[elem_idx] -= epsilon;
            perturbed[i] = from_vec(data_minus, shape.clone())?;
            let loss_minus = evaluate_loss(&func, &perturbed)?;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_grad = analytical_data[elem_idx];
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    value: analytical_grad,
                });
            }

            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

/// One recorded forward pass plus `backward()`; returns the leaf gradients.
fn analytical_gradients<F>(func: &F, inputs: &[Tensor]) -> Result<Vec<Tensor>, GradCheckError>
where
    F: for<'g> Fn(&[Var<'g>]) -> Result<Var<'g>, RetrogradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Var<'_>> = inputs.iter().map(|t| graph.variable(t.clone())).collect();

    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    let loss = sum_op(&output, None, false).map_err(GradCheckError::ForwardPassError)?;
    loss.backward().map_err(GradCheckError::BackwardPassError)?;

    let grads = leaves
        .iter()
        .enumerate()
        .map(|(input_index, leaf)| {
            leaf.grad()
                .map(|g| g.value().as_ref().clone())
                .ok_or(GradCheckError::MissingAnalyticalGrad { input_index })
        })
        .collect::<Result<Vec<Tensor>, GradCheckError>>()?;
    Ok(grads)
}

/// Scalar loss (sum of the output) of an unrecorded forward pass.
fn evaluate_loss<F>(func: &F, inputs: &[Tensor]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&[Var<'g>]) -> Result<Var<'g>, RetrogradError>,
{
    let graph = Graph::new();
    let _no_grad = graph.no_grad();
    let leaves: Vec<Var<'_>> = inputs.iter().map(|t| graph.variable(t.clone())).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    let loss = output.value().sum();
    Ok(loss)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
