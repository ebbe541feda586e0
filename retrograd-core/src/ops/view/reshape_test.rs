use super::*;
use crate::autograd::{check_grad, Graph};
use crate::tensor::{from_vec, randn, scalar};
use crate::utils::testing::check_tensor_near;

#[test]
fn test_reshape_ok() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?);
    let y = reshape_op(&x, &[3, 2])?;
    check_tensor_near(&y.value(), &[3, 2], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 1e-12);
    Ok(())
}

#[test]
fn test_reshape_to_and_from_scalar() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(scalar(5.0));
    let y = reshape_op(&x, &[1, 1, 1])?;
    assert_eq!(y.shape(), vec![1, 1, 1]);
    let z = reshape_op(&y, &[])?;
    assert_eq!(z.shape(), Vec::<usize>::new());
    assert_eq!(z.item()?, 5.0);
    Ok(())
}

#[test]
fn test_reshape_numel_mismatch() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0; 6], vec![2, 3])?);
    let result = reshape_op(&x, &[2, 2]);
    assert!(matches!(result, Err(RetrogradError::ShapeMismatch { .. })));
    Ok(())
}

#[test]
fn test_reshape_same_shape_is_identity() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0; 6], vec![2, 3])?);
    let y = reshape_op(&x, &[2, 3])?;
    assert_eq!(x, y);
    assert_eq!(graph.num_functions(), 0);
    Ok(())
}

#[test]
fn test_reshape_backward() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![6])?);
    let y = x.reshape(&[2, 3])?;
    y.backward()?;
    let gx = x.grad().unwrap();
    assert_eq!(gx.shape(), vec![6]);
    check_tensor_near(&gx.value(), &[6], &[1.0; 6], 1e-12);
    Ok(())
}

#[test]
fn test_reshape_grad_check() {
    check_grad(|xs| reshape_op(&xs[0], &[3, 2]), &[randn(&[2, 3])], 1e-6, 1e-4).unwrap();
}
