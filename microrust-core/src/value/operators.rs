// src/value/operators.rs
//
// Infix arithmetic for `Value`. Every combination of owned/borrowed operands
// forwards to the `&Value ⊕ &Value` form, which calls the matching `_op`
// function. A bare `f64` on either side is wrapped as a fresh constant leaf.

use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl Value {
    /// Raises this value to a constant power.
    ///
    /// The exponent is a plain `f64`: exponents that are themselves graph
    /// nodes are not differentiable here and cannot be expressed.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Natural exponential, `e^self`.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    /// Hyperbolic tangent, built from `exp`, `+`, `-` and `/`.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
