//! Graph recording and reverse-mode traversal.
//!
//! - [`graph`]: the arena that owns variable and function nodes.
//! - [`variable`]: the `Var` handle user code works with.
//! - [`function`]: the `Function` trait and the invocation protocol.
//! - [`backward`]: the generation-ordered backward engine.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward;
pub mod function;
pub mod grad_check;
pub mod graph;
pub mod variable;

pub use function::{invoke, invoke_single, BackwardContext, Function, FunctionRef};
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{FuncId, Graph, GraphMark, VarId};
pub use variable::Var;
