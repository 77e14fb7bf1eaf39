use crate::autograd::{BackwardOp, OpKind};
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for the natural exponential.
#[derive(Debug)]
struct ExpBackward;

impl BackwardOp for ExpBackward {
    fn kind(&self) -> OpKind {
        OpKind::Exp
    }

    fn backward(&self, grad_output: f64, output: f64, _inputs: &[f64]) -> Vec<f64> {
        // d(e^a)/da = e^a, which is the output itself
        vec![grad_output * output]
    }
}

/// Computes `e^a`. Overflows to `+inf` for large inputs.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), vec![a.clone()], Rc::new(ExpBackward))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
