use super::*;
use crate::autograd::{check_grad, Graph};
use crate::tensor::{from_vec, randn};
use crate::utils::testing::check_tensor_near;
use approx::assert_relative_eq;
use std::f64::consts::PI;

#[test]
fn test_sin_forward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![0.0, PI / 2.0, PI], vec![3])?);
    let y = sin_op(&x)?;
    check_tensor_near(&y.value(), &[3], &[0.0, 1.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_sin_backward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(PI / 4.0);
    let y = sin_op(&x)?;
    y.backward()?;
    assert_relative_eq!(x.grad().unwrap().item()?, (PI / 4.0).cos(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_cos_backward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    let y = cos_op(&x)?;
    assert_relative_eq!(y.item()?, 1.0f64.cos(), epsilon = 1e-12);
    y.backward()?;
    assert_relative_eq!(x.grad().unwrap().item()?, -(1.0f64.sin()), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sin_grad_check() {
    check_grad(|xs| sin_op(&xs[0]), &[randn(&[2, 3])], 1e-6, 1e-4).unwrap();
}

#[test]
fn test_cos_grad_check() {
    check_grad(|xs| cos_op(&xs[0]), &[randn(&[2, 3])], 1e-6, 1e-4).unwrap();
}
