// examples/sin_regression.rs
//!
//! Fits `y = sin(2πx) + noise` with a two-layer network (linear, sigmoid,
//! linear) trained by plain gradient descent. Parameters live as plain tensors
//! between iterations; each iteration records its forward pass into a fresh
//! `Graph`, which is dropped as soon as the update has been read out.
//!
//! Run with `RUST_LOG=debug` to see the backward engine's log lines.

use retrograd_core::{
    ops::{linear_op, mean_squared_error_op, sigmoid_op},
    tensor::{rand, randn, zeros, Tensor},
    Graph, RetrogradError,
};

struct Params {
    w1: Tensor,
    b1: Tensor,
    w2: Tensor,
    b2: Tensor,
}

fn main() -> Result<(), RetrogradError> {
    env_logger::init();

    let x_data = rand(&[100, 1]);
    let y_data = x_data.mapv(|v| (2.0 * std::f64::consts::PI * v).sin()) + rand(&[100, 1]);

    let (hidden, lr, iters) = (10, 0.2, 10_000);
    let mut params = Params {
        w1: randn(&[1, hidden]) * 0.01,
        b1: zeros(&[hidden]),
        w2: randn(&[hidden, 1]) * 0.01,
        b2: zeros(&[1]),
    };

    for i in 0..iters {
        let graph = Graph::new();
        let x = graph.variable(x_data.clone());
        let y = graph.variable(y_data.clone());
        let w1 = graph.variable_named(params.w1.clone(), "W1");
        let b1 = graph.variable_named(params.b1.clone(), "b1");
        let w2 = graph.variable_named(params.w2.clone(), "W2");
        let b2 = graph.variable_named(params.b2.clone(), "b2");

        let h = sigmoid_op(&linear_op(&x, &w1, Some(&b1))?)?;
        let y_pred = linear_op(&h, &w2, Some(&b2))?;
        let loss = mean_squared_error_op(&y_pred, &y)?;
        loss.backward()?;

        let step = |p: &Tensor, v: &retrograd_core::Var<'_>| -> Tensor {
            match v.grad() {
                Some(g) => p - &(g.value().as_ref() * lr),
                None => p.clone(),
            }
        };
        params = Params {
            w1: step(&params.w1, &w1),
            b1: step(&params.b1, &b1),
            w2: step(&params.w2, &w2),
            b2: step(&params.b2, &b2),
        };

        if i % 1000 == 0 {
            println!("iter {:>5}: loss {:.6}", i, loss.item()?);
        }
    }
    Ok(())
}
