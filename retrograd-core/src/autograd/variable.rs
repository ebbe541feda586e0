use crate::autograd::backward::run_backward;
use crate::autograd::function::FunctionRef;
use crate::autograd::graph::{FuncId, Graph, VarId};
use crate::error::RetrogradError;
use crate::ops::reduction::sum_op;
use crate::ops::view::{reshape_op, transpose_op};
use crate::tensor::{self, Tensor};
use std::fmt;
use std::ptr;
use std::rc::Rc;

/// Handle to a variable node of a [`Graph`].
///
/// `Var` is `Copy`: it is only the graph reference plus an index, so passing
/// it around never clones the underlying tensor. The node itself is owned by
/// the graph and lives as long as the graph does.
#[derive(Clone, Copy)]
pub struct Var<'g> {
    graph: &'g Graph,
    id: VarId,
}

impl<'g> Var<'g> {
    pub(crate) fn new(graph: &'g Graph, id: VarId) -> Self {
        Var { graph, id }
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns a shared handle to the current value.
    pub fn value(&self) -> Rc<Tensor> {
        Rc::clone(&self.graph.var_node(self.id).value)
    }

    /// Replaces the value wholesale (parameter updates done outside the engine).
    ///
    /// Function nodes that already consumed this variable keep reading the new
    /// value during backward, so only call this between optimization steps.
    pub fn set_value(&self, value: Tensor) {
        self.graph.update_var(self.id, |node| node.value = Rc::new(value));
    }

    pub fn shape(&self) -> Vec<usize> {
        self.graph.var_node(self.id).value.shape().to_vec()
    }

    pub fn ndim(&self) -> usize {
        self.graph.var_node(self.id).value.ndim()
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.graph.var_node(self.id).value.len()
    }

    /// The value of a single-element variable.
    pub fn item(&self) -> Result<f64, RetrogradError> {
        tensor::item(&self.graph.var_node(self.id).value)
    }

    pub fn name(&self) -> Option<String> {
        self.graph.var_node(self.id).name.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.graph.update_var(self.id, |node| node.name = Some(name));
    }

    pub fn generation(&self) -> usize {
        self.graph.var_node(self.id).generation
    }

    /// `true` for variables created by user code rather than by an operator.
    pub fn is_leaf(&self) -> bool {
        self.creator_id().is_none()
    }

    /// The function node that produced this variable, if it was recorded.
    pub fn creator(&self) -> Option<FunctionRef<'g>> {
        self.creator_id().map(|id| FunctionRef::new(self.graph, id))
    }

    pub(crate) fn creator_id(&self) -> Option<FuncId> {
        self.graph.var_node(self.id).creator
    }

    /// Links this variable to the function that produced it.
    pub(crate) fn set_creator(&self, func: FuncId, func_generation: usize) {
        self.graph.update_var(self.id, |node| {
            node.creator = Some(func);
            node.generation = func_generation + 1;
        });
    }

    pub fn grad(&self) -> Option<Var<'g>> {
        self.graph
            .var_node(self.id)
            .grad
            .map(|id| Var::new(self.graph, id))
    }

    /// Injects a gradient by hand; the next backward pass starts from it.
    pub fn set_grad(&self, grad: Option<Var<'g>>) {
        if let Some(g) = grad.as_ref() {
            assert!(
                ptr::eq(g.graph, self.graph),
                "gradient variable belongs to a different graph"
            );
        }
        self.graph.update_var(self.id, |node| node.grad = grad.map(|g| g.id));
    }

    pub fn clear_grad(&self) {
        self.graph.update_var(self.id, |node| node.grad = None);
    }

    /// Backpropagates from this variable with `retain_grad = false` and
    /// `create_graph = false`.
    pub fn backward(&self) -> Result<(), RetrogradError> {
        self.backward_with(false, false)
    }

    /// Backpropagates from this variable, populating `grad` on every ancestor.
    ///
    /// * `retain_grad`: keep the gradients of intermediate variables.
    /// * `create_graph`: record the backward computation itself so gradients
    ///   can be differentiated again.
    ///
    /// Gradients accumulate: calling this twice without [`Var::clear_grad`]
    /// sums both contributions into the leaves.
    ///
    /// # Errors
    /// `ShapeMismatch` when an operator returns a gradient whose shape differs
    /// from its input. Nodes processed before the failing one keep what they
    /// accumulated; the failing node's inputs are left untouched.
    pub fn backward_with(&self, retain_grad: bool, create_graph: bool) -> Result<(), RetrogradError> {
        run_backward(*self, retain_grad, create_graph)
    }

    pub fn reshape(&self, shape: &[usize]) -> Result<Var<'g>, RetrogradError> {
        reshape_op(self, shape)
    }

    pub fn transpose(&self) -> Result<Var<'g>, RetrogradError> {
        transpose_op(self)
    }

    pub fn sum(&self, axis: Option<usize>, keepdims: bool) -> Result<Var<'g>, RetrogradError> {
        sum_op(self, axis, keepdims)
    }
}

impl PartialEq for Var<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for Var<'_> {}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.var_node(self.id);
        f.debug_struct("Var")
            .field("id", &self.id)
            .field("name", &node.name)
            .field("shape", &node.value.shape())
            .field("generation", &node.generation)
            .field("creator", &node.creator)
            .field("grad", &node.grad)
            .finish()
    }
}

impl fmt::Display for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value.len() == 1 {
            write!(f, "variable({})", value.iter().next().copied().unwrap_or_default())
        } else {
            write!(f, "variable({})", value)
        }
    }
}

#[cfg(test)]
#[path = "variable_test.rs"]
mod tests;
