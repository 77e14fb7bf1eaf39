use crate::autograd::{BackwardOp, OpKind};
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward;

impl BackwardOp for MulBackward {
    fn kind(&self) -> OpKind {
        OpKind::Mul
    }

    fn backward(&self, grad_output: f64, _output: f64, inputs: &[f64]) -> Vec<f64> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![grad_output * inputs[1], grad_output * inputs[0]]
    }
}

/// Multiplies two values, `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() * b.data(),
        vec![a.clone(), b.clone()],
        Rc::new(MulBackward),
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
