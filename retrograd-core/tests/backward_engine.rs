use retrograd_core::ops::{add_op, mul_op, square_op};
use retrograd_core::{Flag, Graph, RetrogradError};

mod common;
use common::{create_test_tensor, init_logging};

#[test]
fn test_diamond_graph() -> Result<(), RetrogradError> {
    init_logging();
    let graph = Graph::new();
    let x = graph.scalar(2.0);
    let a = square_op(&x)?;
    let y = add_op(&square_op(&a)?, &square_op(&a)?)?;
    assert_eq!(y.item()?, 32.0);
    y.backward()?;
    assert_eq!(x.grad().expect("x grad").item()?, 64.0);
    Ok(())
}

#[test]
fn test_shared_leaf() -> Result<(), RetrogradError> {
    init_logging();
    let graph = Graph::new();
    let x0 = graph.scalar(1.0);
    let x1 = graph.scalar(1.0);
    let t = add_op(&x0, &x1)?;
    let y = add_op(&x0, &t)?;
    y.backward()?;
    assert_eq!(x0.grad().unwrap().item()?, 2.0);
    assert_eq!(x1.grad().unwrap().item()?, 1.0);
    Ok(())
}

#[test]
fn test_gradients_accumulate_across_calls() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.scalar(3.0);
    let y = add_op(&x, &x)?;
    y.backward()?;
    assert_eq!(x.grad().unwrap().item()?, 2.0);

    // y's own gradient was consumed, so the second pass reseeds it with ones
    y.backward()?;
    assert_eq!(x.grad().unwrap().item()?, 4.0);

    x.clear_grad();
    let z = add_op(&add_op(&x, &x)?, &x)?;
    z.backward()?;
    assert_eq!(x.grad().unwrap().item()?, 3.0);
    Ok(())
}

#[test]
fn test_retain_grad() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x0 = graph.scalar(1.0);
    let x1 = graph.scalar(1.0);
    let t = add_op(&x0, &x1)?;
    let y = add_op(&x0, &t)?;

    y.backward_with(false, false)?;
    assert!(y.grad().is_none());
    assert!(t.grad().is_none());
    assert_eq!(x0.grad().unwrap().item()?, 2.0);
    assert_eq!(x1.grad().unwrap().item()?, 1.0);

    x0.clear_grad();
    x1.clear_grad();
    y.backward_with(true, false)?;
    assert_eq!(y.grad().unwrap().item()?, 1.0);
    assert_eq!(t.grad().unwrap().item()?, 1.0);
    Ok(())
}

#[test]
fn test_no_grad_scope() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable(create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]));
    let before = graph.num_functions();
    let y = {
        let _guard = graph.no_grad();
        let y = square_op(&x)?;
        assert!(y.creator().is_none());
        y
    };
    assert_eq!(graph.num_functions(), before);
    assert!(graph.config().is_backprop_enabled());

    // backward on an unrecorded output only seeds the output itself
    y.backward()?;
    assert!(x.grad().is_none());
    assert_eq!(y.grad().unwrap().shape(), vec![3]);
    Ok(())
}

fn forward_then_fail(graph: &Graph) -> Result<(), RetrogradError> {
    let _guard = graph.no_grad();
    let a = graph.variable(create_test_tensor(vec![1.0, 2.0], vec![2]));
    let b = graph.variable(create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]));
    mul_op(&a, &b)?;
    Ok(())
}

#[test]
fn test_no_grad_restored_after_error() {
    let graph = Graph::new();
    let result = forward_then_fail(&graph);
    assert!(matches!(result, Err(RetrogradError::BroadcastError { .. })));
    assert!(graph.config().get(Flag::EnableBackprop));
}

#[test]
fn test_no_grad_restored_after_panic() {
    let graph = Graph::new();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = graph.no_grad();
        panic!("inside no_grad");
    }));
    assert!(outcome.is_err());
    assert!(graph.config().is_backprop_enabled());
}

#[test]
fn test_independent_graphs_have_independent_flags() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let _guard = g1.no_grad();
    assert!(!g1.config().is_backprop_enabled());
    assert!(g2.config().is_backprop_enabled());
}

#[test]
fn test_graph_walk_from_output() -> Result<(), RetrogradError> {
    let graph = Graph::new();
    let x = graph.variable_named(create_test_tensor(vec![1.0, 2.0], vec![2]), "x");
    let y = mul_op(&square_op(&x)?, &x)?;

    let mut names = Vec::new();
    let mut frontier = vec![y];
    while let Some(v) = frontier.pop() {
        if let Some(f) = v.creator() {
            names.push(f.name());
            assert!(f.inputs().iter().all(|i| i.generation() <= f.generation()));
            frontier.extend(f.inputs());
        }
    }
    assert_eq!(names, vec!["Mul", "Pow"]);
    Ok(())
}
