use super::*;
use crate::ops::arithmetic::{add_op, mul_op, square_op};
use crate::tensor::{from_vec, ones};

#[test]
fn test_generation_follows_creator() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(2.0);
    let a = square_op(&x)?;
    let b = square_op(&a)?;
    let y = add_op(&b, &x)?;
    assert_eq!(a.generation(), 1);
    assert_eq!(b.generation(), 2);
    // max input generation (2) + 1
    assert_eq!(y.generation(), 3);
    assert_eq!(y.creator().unwrap().generation(), 2);
    assert!(!y.is_leaf());
    Ok(())
}

#[test]
fn test_value_accessors() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?);
    assert_eq!(x.shape(), vec![2, 3]);
    assert_eq!(x.ndim(), 2);
    assert_eq!(x.size(), 6);
    assert!(matches!(x.item(), Err(RetrogradError::NotAScalar { .. })));
    Ok(())
}

#[test]
fn test_set_value_replaces_payload() {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    x.set_value(ones(&[2]));
    assert_eq!(x.shape(), vec![2]);
    assert_eq!(x.value().sum(), 2.0);
}

#[test]
fn test_set_name() {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    x.set_name("x");
    assert_eq!(x.name().as_deref(), Some("x"));
}

#[test]
fn test_set_and_clear_grad() {
    let graph = Graph::new();
    let x = graph.scalar(1.0);
    let g = graph.scalar(5.0);
    x.set_grad(Some(g));
    assert_eq!(x.grad(), Some(g));
    x.clear_grad();
    assert!(x.grad().is_none());
}

#[test]
#[should_panic(expected = "different graph")]
fn test_set_grad_from_other_graph_panics() {
    let graph = Graph::new();
    let other = Graph::new();
    let x = graph.scalar(1.0);
    x.set_grad(Some(other.scalar(1.0)));
}

#[test]
fn test_backward_starts_from_injected_grad() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(3.0);
    let y = mul_op(&x, &x)?;
    y.set_grad(Some(graph.scalar(10.0)));
    y.backward()?;
    assert_eq!(x.grad().unwrap().item()?, 60.0);
    Ok(())
}

#[test]
fn test_equality_is_identity() {
    let graph = Graph::new();
    let a = graph.scalar(1.0);
    let b = graph.scalar(1.0);
    assert_eq!(a, a);
    assert_ne!(a, b);
}

#[test]
fn test_display() {
    let graph = Graph::new();
    assert_eq!(graph.scalar(1.5).to_string(), "variable(1.5)");
}
