// Element-wise arithmetic. Binary operators broadcast numpy-style and sum
// their gradients back to each operand's shape. `overload` maps the std
// operator traits on `Var` onto these functions.
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod overload;
pub mod pow;
pub mod sub;

pub use add::{add_op, add_scalar_op};
pub use div::{div_op, div_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use neg::{neg_op, pos_op};
pub use pow::{pow_op, square_op};
pub use sub::{rsub_scalar_op, sub_op};
