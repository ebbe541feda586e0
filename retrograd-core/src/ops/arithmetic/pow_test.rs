use super::*;
use crate::autograd::{check_grad, Graph};
use crate::tensor::{from_vec, rand};
use crate::utils::testing::check_tensor_near;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0, 2.0, 3.0], vec![3])?);
    let y = pow_op(&x, 3.0)?;
    check_tensor_near(&y.value(), &[3], &[1.0, 8.0, 27.0], 1e-12);
    Ok(())
}

#[test]
fn test_pow_fractional_exponent() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(4.0);
    let y = pow_op(&x, 0.5)?;
    assert_relative_eq!(y.item()?, 2.0);
    y.backward()?;
    assert_relative_eq!(x.grad().unwrap().item()?, 0.25);
    Ok(())
}

#[test]
fn test_square_backward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(3.0);
    let y = square_op(&x)?;
    assert_eq!(y.item()?, 9.0);
    y.backward()?;
    assert_relative_eq!(x.grad().unwrap().item()?, 6.0);
    Ok(())
}

#[test]
fn test_pow_grad_check() {
    // positive base keeps the fractional power real
    let inputs = vec![rand(&[2, 3]) + 0.5];
    check_grad(|xs| pow_op(&xs[0], 2.5), &inputs, 1e-6, 1e-4).unwrap();
}
