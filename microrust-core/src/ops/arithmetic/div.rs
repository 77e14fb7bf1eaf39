use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// A zero divisor is not guarded against: the result (and the gradients
/// flowing through it) are infinite or NaN.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
