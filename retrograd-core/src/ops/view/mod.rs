// Shape-changing operators. Each one remembers the input shape it saw so the
// gradient can be mapped back.
pub mod broadcast_to;
pub mod reshape;
pub mod transpose;

pub use broadcast_to::broadcast_to_op;
pub use reshape::reshape_op;
pub use transpose::{transpose_axes_op, transpose_op};
