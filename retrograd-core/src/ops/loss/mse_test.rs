use super::*;
use crate::autograd::{check_grad, Graph};
use crate::tensor::{from_vec, randn};
use crate::utils::testing::check_tensor_near;
use approx::assert_relative_eq;

#[test]
fn test_mse_forward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let a = graph.variable(from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![4, 1])?);
    let b = graph.variable(from_vec(vec![0.0, 2.0, 5.0, 4.0], vec![4, 1])?);
    let loss = mean_squared_error_op(&a, &b)?;
    assert_eq!(loss.shape(), Vec::<usize>::new());
    assert_relative_eq!(loss.item()?, (1.0 + 0.0 + 4.0 + 0.0) / 4.0);
    Ok(())
}

#[test]
fn test_mse_backward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let a = graph.variable(from_vec(vec![1.0, 2.0], vec![2])?);
    let b = graph.variable(from_vec(vec![3.0, 2.0], vec![2])?);
    mean_squared_error_op(&a, &b)?.backward()?;
    // 2 (a - b) / N
    check_tensor_near(&a.grad().unwrap().value(), &[2], &[-2.0, 0.0], 1e-12);
    check_tensor_near(&b.grad().unwrap().value(), &[2], &[2.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_mse_grad_check() {
    let inputs = vec![randn(&[5, 1]), randn(&[5, 1])];
    check_grad(|xs| mean_squared_error_op(&xs[0], &xs[1]), &inputs, 1e-6, 1e-4).unwrap();
}

#[test]
fn test_mse_grad_check_broadcast() {
    let inputs = vec![randn(&[4, 3]), randn(&[3])];
    check_grad(|xs| mean_squared_error_op(&xs[0], &xs[1]), &inputs, 1e-6, 1e-4).unwrap();
}
