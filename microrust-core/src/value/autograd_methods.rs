// src/value/autograd_methods.rs

use crate::autograd::graph;
use crate::error::MicroRustError;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this value with respect to every node it
    /// depends on, accumulating into their `grad` fields.
    ///
    /// The root's gradient is seeded to 1. Nothing else is reset: call
    /// [`zero_grad`](Value::zero_grad) on the parameters (or use an optimizer)
    /// before running a fresh pass.
    ///
    /// # Errors
    /// Returns `MicroRustError::CycleDetected` if the operand relation loops.
    pub fn backward(&self) -> Result<(), MicroRustError> {
        graph::backward(self)
    }

    /// Resets the gradient of this value to 0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds the contribution of this node's gradient to each of its operands.
    /// No-op for leaves.
    pub(crate) fn propagate_grad(&self) {
        let (operands, input_grads) = {
            let node = self.borrow_node();
            let grad_fn = match node.grad_fn.as_ref() {
                Some(grad_fn) => grad_fn,
                None => return,
            };
            let inputs: Vec<f64> = node.operands.iter().map(Value::data).collect();
            let input_grads = grad_fn.backward(node.grad, node.data, &inputs);
            (node.operands.clone(), input_grads)
        };
        for (operand, grad) in operands.iter().zip(input_grads) {
            operand.accumulate_grad(grad);
        }
    }
}
