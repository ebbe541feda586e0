use super::*;
use crate::autograd::{check_grad, Graph};
use crate::tensor::{from_vec, randn};
use crate::utils::testing::check_tensor_near;

#[test]
fn test_linear_forward_with_bias() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?);
    let w = graph.variable(from_vec(vec![1.0, 0.0, 0.0, 1.0], vec![2, 2])?);
    let b = graph.variable(from_vec(vec![10.0, 20.0], vec![2])?);
    let y = linear_op(&x, &w, Some(&b))?;
    check_tensor_near(&y.value(), &[2, 2], &[11.0, 22.0, 13.0, 24.0], 1e-12);
    assert_eq!(y.creator().unwrap().inputs().len(), 3);
    Ok(())
}

#[test]
fn test_linear_without_bias_has_two_inputs() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(randn(&[3, 2]));
    let w = graph.variable(randn(&[2, 4]));
    let y = linear_op(&x, &w, None)?;
    assert_eq!(y.shape(), vec![3, 4]);
    assert_eq!(y.creator().unwrap().inputs(), vec![x, w]);
    y.backward()?;
    assert_eq!(x.grad().unwrap().shape(), vec![3, 2]);
    assert_eq!(w.grad().unwrap().shape(), vec![2, 4]);
    Ok(())
}

#[test]
fn test_linear_matches_simple() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(randn(&[4, 3]));
    let w = graph.variable(randn(&[3, 2]));
    let b = graph.variable(randn(&[2]));

    let fused = linear_op(&x, &w, Some(&b))?;
    let composed = linear_simple_op(&x, &w, Some(&b))?;
    let expected: Vec<f64> = composed.value().iter().copied().collect();
    check_tensor_near(&fused.value(), &[4, 2], &expected, 1e-12);

    fused.backward()?;
    let fused_gb: Vec<f64> = b.grad().unwrap().value().iter().copied().collect();
    b.clear_grad();
    composed.backward()?;
    check_tensor_near(&b.grad().unwrap().value(), &[2], &fused_gb, 1e-12);
    // each bias element collects one gradient per batch row
    check_tensor_near(&b.grad().unwrap().value(), &[2], &[4.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_linear_grad_check() {
    let inputs = vec![randn(&[4, 3]), randn(&[3, 2]), randn(&[2])];
    check_grad(|xs| linear_op(&xs[0], &xs[1], Some(&xs[2])), &inputs, 1e-6, 1e-4).unwrap();
}

#[test]
fn test_linear_simple_grad_check() {
    let inputs = vec![randn(&[4, 3]), randn(&[3, 2]), randn(&[1, 2])];
    check_grad(|xs| linear_simple_op(&xs[0], &xs[1], Some(&xs[2])), &inputs, 1e-6, 1e-4).unwrap();
}
