use crate::ops::arithmetic::{add_op, div_op, mul_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::value::Value;

/// Hyperbolic tangent built from `exp`, `+`, `-` and `/` rather than as one
/// fused node, so the graph exposes every step.
///
/// Non-positive inputs use `(e^(2a) - 1) / (e^(2a) + 1)`, positive inputs the
/// equivalent `(1 - e^(-2a)) / (1 + e^(-2a))`. The exponent is never positive,
/// so `exp` cannot overflow and the result saturates at ±1.
pub fn tanh_op(a: &Value) -> Value {
    if a.data() > 0.0 {
        let e = exp_op(&mul_op(a, &Value::new(-2.0)));
        let numerator = sub_op(&Value::new(1.0), &e);
        let denominator = add_op(&Value::new(1.0), &e);
        div_op(&numerator, &denominator)
    } else {
        let e = exp_op(&mul_op(a, &Value::new(2.0)));
        let numerator = sub_op(&e, &Value::new(1.0));
        let denominator = add_op(&e, &Value::new(1.0));
        div_op(&numerator, &denominator)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
