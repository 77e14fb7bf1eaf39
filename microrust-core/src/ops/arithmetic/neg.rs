use crate::autograd::{BackwardOp, OpKind};
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for negation.
#[derive(Debug)]
struct NegBackward;

impl BackwardOp for NegBackward {
    fn kind(&self) -> OpKind {
        OpKind::Neg
    }

    fn backward(&self, grad_output: f64, _output: f64, _inputs: &[f64]) -> Vec<f64> {
        vec![-grad_output]
    }
}

/// Negates a value, `-a`.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), vec![a.clone()], Rc::new(NegBackward))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
