use crate::autograd::function::Function;
use crate::autograd::variable::Var;
use crate::config::{Config, ConfigGuard, Flag};
use crate::tensor::{self, Tensor};
use log::trace;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Index of a variable node inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub(crate) usize);

/// Index of a function node inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuncId(pub(crate) usize);

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for FuncId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct VariableNode {
    pub(crate) value: Rc<Tensor>,
    /// Gradient, itself a variable so it can be differentiated again.
    pub(crate) grad: Option<VarId>,
    pub(crate) creator: Option<FuncId>,
    pub(crate) generation: usize,
    pub(crate) name: Option<String>,
}

#[derive(Debug)]
pub(crate) struct FunctionNode {
    pub(crate) op: Rc<dyn Function>,
    pub(crate) inputs: Vec<VarId>,
    pub(crate) outputs: Vec<VarId>,
    pub(crate) generation: usize,
}

/// Position in the arena returned by [`Graph::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphMark {
    variables: usize,
    functions: usize,
}

/// Arena owning every variable and function node of a computation.
///
/// Edges between nodes (`creator`, `inputs`, `outputs`) are plain ids into
/// the arena, so the variable -> creator -> output cycle never keeps anything
/// alive on its own. Nodes are released either when the `Graph` is dropped or,
/// for a long-lived graph holding parameters, by rolling it back to a
/// [`GraphMark`] after each step:
///
/// ```
/// use retrograd_core::{ops, Graph};
///
/// let mut graph = Graph::new();
/// let w = graph.scalar(3.0).id();
/// let mark = graph.mark();
/// for _ in 0..10 {
///     let w = graph.var(w);
///     let loss = ops::square_op(&w)?;
///     loss.backward()?;
///     let step = w.value().as_ref() - &(w.grad().unwrap().value().as_ref() * 0.1);
///     w.set_value(step);
///     graph.truncate(mark);
/// }
/// assert_eq!(graph.num_variables(), 1);
/// # Ok::<(), retrograd_core::RetrogradError>(())
/// ```
///
/// The graph also carries the [`Config`] consulted by every operator call.
/// Both live behind `Cell`/`RefCell`, so a graph is confined to one thread.
#[derive(Debug, Default)]
pub struct Graph {
    variables: RefCell<Vec<VariableNode>>,
    functions: RefCell<Vec<FunctionNode>>,
    config: Config,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Temporarily overrides `flag`; see [`Config::using`].
    #[must_use = "the previous value is restored as soon as the guard is dropped"]
    pub fn using_config(&self, flag: Flag, value: bool) -> ConfigGuard<'_> {
        self.config.using(flag, value)
    }

    /// Disables graph recording until the returned guard is dropped.
    #[must_use = "recording is re-enabled as soon as the guard is dropped"]
    pub fn no_grad(&self) -> ConfigGuard<'_> {
        self.config.using(Flag::EnableBackprop, false)
    }

    /// Creates a leaf variable (generation 0, no creator, no gradient).
    pub fn variable(&self, value: Tensor) -> Var<'_> {
        let id = self.push_variable(value, None);
        Var::new(self, id)
    }

    pub fn variable_named(&self, value: Tensor, name: impl Into<String>) -> Var<'_> {
        let id = self.push_variable(value, Some(name.into()));
        Var::new(self, id)
    }

    /// Creates a rank-0 leaf variable.
    pub fn scalar(&self, value: f64) -> Var<'_> {
        self.variable(tensor::scalar(value))
    }

    /// Same as [`Graph::scalar`]; reads better inside backward formulas.
    pub fn constant(&self, value: f64) -> Var<'_> {
        self.scalar(value)
    }

    /// Handle to an existing variable, e.g. a parameter kept by id across
    /// [`Graph::truncate`] calls.
    ///
    /// # Panics
    /// If `id` does not name a live variable of this graph.
    pub fn var(&self, id: VarId) -> Var<'_> {
        assert!(
            id.0 < self.num_variables(),
            "{} is not a variable of this graph ({} live)",
            id,
            self.num_variables()
        );
        Var::new(self, id)
    }

    /// Records the current end of the arena.
    pub fn mark(&self) -> GraphMark {
        GraphMark {
            variables: self.num_variables(),
            functions: self.num_functions(),
        }
    }

    /// Drops every node created after `mark`.
    ///
    /// Variables older than the mark survive with their values. A surviving
    /// gradient that points past the mark is cleared. Taking `&mut self`
    /// guarantees no `Var` handle outlives the nodes it refers to.
    ///
    /// # Panics
    /// If `mark` lies beyond the current end of the arena.
    pub fn truncate(&mut self, mark: GraphMark) {
        let variables = self.variables.get_mut();
        let functions = self.functions.get_mut();
        assert!(
            mark.variables <= variables.len() && mark.functions <= functions.len(),
            "mark {:?} is past the end of the graph ({} variables, {} functions)",
            mark,
            variables.len(),
            functions.len()
        );
        let dropped = (variables.len() - mark.variables, functions.len() - mark.functions);
        variables.truncate(mark.variables);
        functions.truncate(mark.functions);
        for node in variables.iter_mut() {
            if matches!(node.grad, Some(g) if g.0 >= mark.variables) {
                node.grad = None;
            }
        }
        trace!("truncated {} variables and {} functions", dropped.0, dropped.1);
    }

    pub fn num_variables(&self) -> usize {
        self.variables.borrow().len()
    }

    pub fn num_functions(&self) -> usize {
        self.functions.borrow().len()
    }

    pub(crate) fn push_variable(&self, value: Tensor, name: Option<String>) -> VarId {
        let mut variables = self.variables.borrow_mut();
        variables.push(VariableNode {
            value: Rc::new(value),
            grad: None,
            creator: None,
            generation: 0,
            name,
        });
        VarId(variables.len() - 1)
    }

    pub(crate) fn push_function(&self, node: FunctionNode) -> FuncId {
        let mut functions = self.functions.borrow_mut();
        functions.push(node);
        FuncId(functions.len() - 1)
    }

    pub(crate) fn var_node(&self, id: VarId) -> Ref<'_, VariableNode> {
        Ref::map(self.variables.borrow(), |variables| &variables[id.0])
    }

    pub(crate) fn update_var<R>(&self, id: VarId, f: impl FnOnce(&mut VariableNode) -> R) -> R {
        let mut variables = self.variables.borrow_mut();
        f(&mut variables[id.0])
    }

    pub(crate) fn func_node(&self, id: FuncId) -> Ref<'_, FunctionNode> {
        Ref::map(self.functions.borrow(), |functions| &functions[id.0])
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
