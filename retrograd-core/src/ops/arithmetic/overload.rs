// retrograd-core/src/ops/arithmetic/overload.rs

//! `+ - * /` and unary `-` on [`Var`].
//!
//! Every overload delegates to the matching `_op` function, so the result is
//! recorded like any other operator call. Operands may be variables (owned or
//! borrowed), `f64` constants on either side, or a `&Tensor` on the right.
//!
//! # Panics
//! The overloads panic where the `_op` function would return an error, e.g.
//! for shapes that do not broadcast. Call `add_op` and friends directly to get
//! the `Result` instead.

use crate::autograd::Var;
use crate::error::RetrogradError;
use crate::ops::arithmetic::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, neg_op, rsub_scalar_op,
    sub_op,
};
use crate::tensor::Tensor;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn or_panic<'g>(symbol: &str, result: Result<Var<'g>, RetrogradError>) -> Var<'g> {
    match result {
        Ok(y) => y,
        Err(err) => panic!("`{}` on variables failed: {}", symbol, err),
    }
}

// Scalar forms the `_op` functions do not cover directly.

fn sub_scalar<'g>(a: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    add_scalar_op(a, -value)
}

fn scalar_add<'g>(b: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    add_scalar_op(b, value)
}

fn scalar_mul<'g>(b: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    mul_scalar_op(b, value)
}

fn scalar_div<'g>(b: &Var<'g>, value: f64) -> Result<Var<'g>, RetrogradError> {
    div_op(&b.graph().constant(value), b)
}

/// `$var_fn(a, b)` for `a op b`, `$rhs_scalar(a, v)` for `a op v` and
/// `$lhs_scalar(b, v)` for `v op b`.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $symbol:literal, $var_fn:ident, $rhs_scalar:ident, $lhs_scalar:ident) => {
        impl<'g> $trait<&Var<'g>> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: &Var<'g>) -> Var<'g> {
                or_panic($symbol, $var_fn(self, other))
            }
        }

        impl<'g> $trait<Var<'g>> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: Var<'g>) -> Var<'g> {
                $trait::$method(&self, &other)
            }
        }

        impl<'g> $trait<&Var<'g>> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: &Var<'g>) -> Var<'g> {
                $trait::$method(&self, other)
            }
        }

        impl<'g> $trait<Var<'g>> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: Var<'g>) -> Var<'g> {
                $trait::$method(self, &other)
            }
        }

        impl<'g> $trait<f64> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: f64) -> Var<'g> {
                or_panic($symbol, $rhs_scalar(self, other))
            }
        }

        impl<'g> $trait<f64> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: f64) -> Var<'g> {
                $trait::$method(&self, other)
            }
        }

        impl<'g> $trait<&Var<'g>> for f64 {
            type Output = Var<'g>;

            fn $method(self, other: &Var<'g>) -> Var<'g> {
                or_panic($symbol, $lhs_scalar(other, self))
            }
        }

        impl<'g> $trait<Var<'g>> for f64 {
            type Output = Var<'g>;

            fn $method(self, other: Var<'g>) -> Var<'g> {
                $trait::$method(self, &other)
            }
        }

        /// The tensor enters the graph as a constant leaf.
        impl<'g> $trait<&Tensor> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: &Tensor) -> Var<'g> {
                let other = self.graph().variable(other.clone());
                or_panic($symbol, $var_fn(self, &other))
            }
        }

        impl<'g> $trait<&Tensor> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, other: &Tensor) -> Var<'g> {
                $trait::$method(&self, other)
            }
        }
    };
}

impl_binary_op!(Add, add, "+", add_op, add_scalar_op, scalar_add);
impl_binary_op!(Sub, sub, "-", sub_op, sub_scalar, rsub_scalar_op);
impl_binary_op!(Mul, mul, "*", mul_op, mul_scalar_op, scalar_mul);
impl_binary_op!(Div, div, "/", div_op, div_scalar_op, scalar_div);

impl<'g> Neg for &Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        or_panic("-", neg_op(self))
    }
}

impl<'g> Neg for Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        -&self
    }
}

#[cfg(test)]
#[path = "overload_test.rs"]
mod tests;
