use crate::autograd::graph::{FuncId, FunctionNode, Graph};
use crate::autograd::variable::Var;
use crate::error::RetrogradError;
use crate::tensor::Tensor;
use log::trace;
use std::fmt::Debug;
use std::ptr;
use std::rc::Rc;

/// Defines a differentiable operator: a forward rule on raw tensors and the
/// matching backward rule on variables.
///
/// A fresh operator value is built for every call, so any state saved during
/// `forward` (input shapes, exponent, axis...) belongs to that single
/// invocation. Operators are stored as trait objects in the graph, which keeps
/// the set open: callers can implement `Function` for their own operators and
/// run them through [`invoke`].
pub trait Function: Debug {
    /// Short operator name, used in logs and by graph walkers.
    fn name(&self) -> &'static str;

    /// Computes the outputs from the raw input values.
    fn forward(&mut self, xs: &[&Tensor]) -> Result<Vec<Tensor>, RetrogradError>;

    /// Computes one gradient per input, in input order, from the gradients of
    /// the outputs.
    ///
    /// Gradients are expressed with operators on [`Var`]s. When the engine runs
    /// with `create_graph`, recording is enabled during this call and the
    /// returned gradients are themselves differentiable.
    fn backward<'g>(
        &self,
        ctx: &BackwardContext<'g>,
        gys: &[Var<'g>],
    ) -> Result<Vec<Var<'g>>, RetrogradError>;
}

/// What a `backward` call may look at: the graph and the recorded inputs and
/// outputs of the function node being processed.
#[derive(Debug)]
pub struct BackwardContext<'g> {
    graph: &'g Graph,
    inputs: Vec<Var<'g>>,
    outputs: Vec<Var<'g>>,
}

impl<'g> BackwardContext<'g> {
    pub(crate) fn new(graph: &'g Graph, inputs: Vec<Var<'g>>, outputs: Vec<Var<'g>>) -> Self {
        BackwardContext {
            graph,
            inputs,
            outputs,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn input(&self, index: usize) -> Var<'g> {
        self.inputs[index]
    }

    pub fn output(&self, index: usize) -> Var<'g> {
        self.outputs[index]
    }

    pub fn inputs(&self) -> &[Var<'g>] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Var<'g>] {
        &self.outputs
    }
}

/// Read-only view of a recorded function node, for graph walkers.
#[derive(Clone, Copy)]
pub struct FunctionRef<'g> {
    graph: &'g Graph,
    id: FuncId,
}

impl<'g> FunctionRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: FuncId) -> Self {
        FunctionRef { graph, id }
    }

    pub fn id(&self) -> FuncId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.graph.func_node(self.id).op.name()
    }

    pub fn generation(&self) -> usize {
        self.graph.func_node(self.id).generation
    }

    pub fn inputs(&self) -> Vec<Var<'g>> {
        self.graph
            .func_node(self.id)
            .inputs
            .iter()
            .map(|&id| Var::new(self.graph, id))
            .collect()
    }

    pub fn outputs(&self) -> Vec<Var<'g>> {
        self.graph
            .func_node(self.id)
            .outputs
            .iter()
            .map(|&id| Var::new(self.graph, id))
            .collect()
    }

    pub(crate) fn op(&self) -> Rc<dyn Function> {
        Rc::clone(&self.graph.func_node(self.id).op)
    }
}

impl PartialEq for FunctionRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Debug for FunctionRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.graph.func_node(self.id);
        f.debug_struct("FunctionRef")
            .field("id", &self.id)
            .field("op", &node.op.name())
            .field("generation", &node.generation)
            .field("inputs", &node.inputs)
            .field("outputs", &node.outputs)
            .finish()
    }
}

/// Runs `op` on `inputs` and, when recording is enabled, links the outputs
/// into the graph.
///
/// With recording disabled the outputs come back as unlinked leaves and no
/// function node is allocated.
///
/// # Panics
/// If `inputs` is empty, if the inputs belong to different graphs, or if
/// `forward` returns no outputs. These are contract violations of the
/// operator, not runtime conditions.
pub fn invoke<'g, F>(mut op: F, inputs: &[Var<'g>]) -> Result<Vec<Var<'g>>, RetrogradError>
where
    F: Function + 'static,
{
    assert!(!inputs.is_empty(), "operator {} invoked without inputs", op.name());
    let graph = inputs[0].graph();
    assert!(
        inputs.iter().all(|x| ptr::eq(x.graph(), graph)),
        "operator {} received variables from different graphs",
        op.name()
    );

    let values: Vec<Rc<Tensor>> = inputs.iter().map(|x| x.value()).collect();
    let xs: Vec<&Tensor> = values.iter().map(|v| v.as_ref()).collect();
    let ys = op.forward(&xs)?;
    assert!(!ys.is_empty(), "operator {} produced no outputs", op.name());

    let outputs: Vec<Var<'g>> = ys.into_iter().map(|y| graph.variable(y)).collect();
    if !graph.config().is_backprop_enabled() {
        return Ok(outputs);
    }

    let generation = inputs.iter().map(|x| x.generation()).max().unwrap_or(0);
    let name = op.name();
    let func = graph.push_function(FunctionNode {
        op: Rc::new(op),
        inputs: inputs.iter().map(|x| x.id()).collect(),
        outputs: outputs.iter().map(|y| y.id()).collect(),
        generation,
    });
    for output in &outputs {
        output.set_creator(func, generation);
    }
    trace!("recorded {} as {} (generation {})", name, func, generation);

    Ok(outputs)
}

/// [`invoke`] for the common single-output case.
pub fn invoke_single<'g, F>(op: F, inputs: &[Var<'g>]) -> Result<Var<'g>, RetrogradError>
where
    F: Function + 'static,
{
    let outputs = invoke(op, inputs)?;
    Ok(outputs[0])
}

#[cfg(test)]
#[path = "function_test.rs"]
mod tests;
