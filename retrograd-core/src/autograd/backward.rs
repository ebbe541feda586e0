use crate::autograd::function::{BackwardContext, FunctionRef};
use crate::autograd::graph::{FuncId, Graph};
use crate::autograd::variable::Var;
use crate::config::Flag;
use crate::error::RetrogradError;
use crate::ops::arithmetic::add_op;
use crate::tensor::ones_like;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashSet};

/// Work-list of function nodes, popped highest generation first.
///
/// A node is only popped once every consumer of its outputs (all of which sit
/// at a strictly higher generation) has already run, so its output gradients
/// are complete by then.
struct FunctionQueue {
    heap: BinaryHeap<(usize, FuncId)>,
    seen: HashSet<FuncId>,
}

impl FunctionQueue {
    fn new() -> Self {
        FunctionQueue {
            heap: BinaryHeap::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, graph: &Graph, func: FuncId) {
        if self.seen.insert(func) {
            let generation = FunctionRef::new(graph, func).generation();
            self.heap.push((generation, func));
        }
    }

    fn pop(&mut self) -> Option<FuncId> {
        self.heap.pop().map(|(_, func)| func)
    }
}

/// Backward pass rooted at `root`.
///
/// Seeds `root.grad` with ones when it has no gradient yet, then drains the
/// function queue, accumulating every input gradient as a new variable.
pub(crate) fn run_backward<'g>(
    root: Var<'g>,
    retain_grad: bool,
    create_graph: bool,
) -> Result<(), RetrogradError> {
    let graph = root.graph();
    debug!(
        "backward from {} (retain_grad={}, create_graph={})",
        root.id(),
        retain_grad,
        create_graph
    );

    if root.grad().is_none() {
        let seed = graph.variable(ones_like(&root.value()));
        root.set_grad(Some(seed));
    }

    let mut queue = FunctionQueue::new();
    if let Some(creator) = root.creator_id() {
        queue.push(graph, creator);
    }

    let mut processed = 0usize;
    while let Some(func_id) = queue.pop() {
        let func = FunctionRef::new(graph, func_id);
        let op = func.op();
        let inputs = func.inputs();
        let outputs = func.outputs();

        let gys: Vec<Var<'g>> = outputs
            .iter()
            .map(|y| match y.grad() {
                Some(gy) => gy,
                None => panic!(
                    "output {} of {} ({}) reached backward without a gradient",
                    y.id(),
                    op.name(),
                    func_id
                ),
            })
            .collect();

        {
            let _mode = graph.using_config(Flag::EnableBackprop, create_graph);
            let ctx = BackwardContext::new(graph, inputs.clone(), outputs.clone());
            let gxs = op.backward(&ctx, &gys)?;
            assert_eq!(
                gxs.len(),
                inputs.len(),
                "{} returned {} gradients for {} inputs",
                op.name(),
                gxs.len(),
                inputs.len()
            );

            // Every shape is validated before any input gradient is touched.
            for (x, gx) in inputs.iter().zip(&gxs) {
                if gx.shape() != x.shape() {
                    return Err(RetrogradError::ShapeMismatch {
                        expected: x.shape(),
                        actual: gx.shape(),
                        operation: format!("{} backward", op.name()),
                    });
                }
            }

            for (x, gx) in inputs.iter().zip(gxs) {
                // Accumulate into a new variable. The previous gradient may be
                // shared (y = x + x hands out the same one twice).
                let accumulated = match x.grad() {
                    None => gx,
                    Some(prev) => add_op(&prev, &gx)?,
                };
                x.set_grad(Some(accumulated));

                if let Some(creator) = x.creator_id() {
                    queue.push(graph, creator);
                }
            }
        }

        if !retain_grad {
            for y in &outputs {
                y.clear_grad();
            }
        }
        trace!("backward through {} ({})", op.name(), func_id);
        processed += 1;
    }

    debug!("backward from {} done, {} functions processed", root.id(), processed);
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
