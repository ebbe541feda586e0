use approx::assert_relative_eq;
use retrograd_core::ops::{mul_op, pow_op, sin_op, tanh_op};
use retrograd_core::{Graph, RetrogradError, Var};

mod common;
use common::init_logging;

/// Replaces `x.grad` with the derivative of the current `x.grad`.
fn differentiate_again(x: &Var<'_>) -> Result<(), RetrogradError> {
    let gx = x.grad().expect("no gradient to differentiate");
    x.clear_grad();
    gx.backward_with(false, true)
}

#[test]
fn test_sin_second_derivative() -> Result<(), RetrogradError> {
    init_logging();
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    let y = sin_op(&x)?;
    y.backward_with(false, true)?;
    assert_relative_eq!(x.grad().unwrap().item()?, 1.0f64.cos(), epsilon = 1e-12);

    differentiate_again(&x)?;
    assert_relative_eq!(x.grad().unwrap().item()?, -(1.0f64.sin()), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sin_third_derivative() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    sin_op(&x)?.backward_with(false, true)?;
    differentiate_again(&x)?;
    differentiate_again(&x)?;
    assert_relative_eq!(x.grad().unwrap().item()?, -(1.0f64.cos()), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_quartic_derivatives() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(2.0);
    let y = pow_op(&x, 4.0)?;
    y.backward_with(false, true)?;
    // 4x^3, 12x^2, 24x
    assert_relative_eq!(x.grad().unwrap().item()?, 32.0, epsilon = 1e-9);
    differentiate_again(&x)?;
    assert_relative_eq!(x.grad().unwrap().item()?, 48.0, epsilon = 1e-9);
    differentiate_again(&x)?;
    assert_relative_eq!(x.grad().unwrap().item()?, 48.0, epsilon = 1e-9);
    differentiate_again(&x)?;
    assert_relative_eq!(x.grad().unwrap().item()?, 24.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_second_derivative_of_product() -> Result<(), RetrogradError> {
    // y = x * tanh(x); y'' = 2 (1 - t^2) - 2 x t (1 - t^2)
    let graph = Graph::new();
    let x = graph.scalar(0.3);
    let y = mul_op(&x, &tanh_op(&x)?)?;
    y.backward_with(false, true)?;
    differentiate_again(&x)?;
    let t = 0.3f64.tanh();
    let expected = 2.0 * (1.0 - t * t) - 2.0 * 0.3 * t * (1.0 - t * t);
    assert_relative_eq!(x.grad().unwrap().item()?, expected, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_gradient_without_create_graph_is_constant() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    sin_op(&x)?.backward()?;
    let gx = x.grad().unwrap();
    assert!(gx.is_leaf());
    x.clear_grad();
    gx.backward()?;
    // nothing links gx back to x
    assert!(x.grad().is_none());
    Ok(())
}
