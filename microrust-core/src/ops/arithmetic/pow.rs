use crate::autograd::{BackwardOp, OpKind};
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for raising to a constant power.
#[derive(Debug)]
struct PowBackward {
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn kind(&self) -> OpKind {
        OpKind::Pow(self.exponent)
    }

    fn backward(&self, grad_output: f64, _output: f64, inputs: &[f64]) -> Vec<f64> {
        // d(a^n)/da = n * a^(n-1)
        let base = inputs[0];
        vec![grad_output * self.exponent * base.powf(self.exponent - 1.0)]
    }
}

/// Raises `base` to the constant `exponent`.
///
/// Negative exponents are allowed (`div_op` relies on `b^-1`); a zero base
/// then yields an infinite value, as IEEE-754 prescribes.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        vec![base.clone()],
        Rc::new(PowBackward { exponent }),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
