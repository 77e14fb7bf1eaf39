// src/value_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Internal storage for a single node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle so that
/// several results can share the same operand while gradients are still
/// written through an immutable handle.
pub struct ValueData {
    /// Current forward value.
    pub(crate) data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    pub(crate) grad: f64,
    /// Values this node was computed from, in operand order.
    /// Empty for leaves (inputs, constants, parameters).
    pub(crate) operands: Vec<Value>,
    /// Local-derivative rule of the primitive that produced this node.
    /// Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Display name, only used by debug output and graph rendering.
    pub(crate) label: String,
}

impl ValueData {
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            operands: Vec::new(),
            grad_fn: None,
            label: String::new(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

/// Frees the graph below this node iteratively, so dropping the root of a
/// long chain does not grow the call stack.
///
/// An operand whose last handle is held here is unwrapped and its own
/// operands are moved onto the work stack. Shared operands only lose one
/// strong count.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut stack: Vec<Value> = std::mem::take(&mut self.operands);
        while let Some(value) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.node) {
                let mut data = cell.into_inner();
                stack.append(&mut data.operands);
            }
        }
    }
}
