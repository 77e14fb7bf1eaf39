use crate::autograd::{BackwardOp, OpKind};
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward;

impl BackwardOp for AddBackward {
    fn kind(&self) -> OpKind {
        OpKind::Add
    }

    fn backward(&self, grad_output: f64, _output: f64, _inputs: &[f64]) -> Vec<f64> {
        // d(a + b)/da = d(a + b)/db = 1
        vec![grad_output, grad_output]
    }
}

/// Adds two values, `a + b`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        vec![a.clone(), b.clone()],
        Rc::new(AddBackward),
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
