// src/value/create.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::rc::Rc;

impl Value {
    /// Creates a new leaf value with a zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Creates a new leaf value carrying a display label.
    ///
    /// ```
    /// use microrust_core::Value;
    ///
    /// let x = Value::with_label(2.0, "x");
    /// assert_eq!(x.label(), "x");
    /// assert_eq!(x.data(), 2.0);
    /// ```
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.borrow_node_mut().label = label.into();
        value
    }

    /// Allocates the result node of a primitive operation.
    pub(crate) fn from_op(data: f64, operands: Vec<Value>, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                operands,
                grad_fn: Some(grad_fn),
                label: String::new(),
            })),
        }
    }
}

/// Wraps every number of `data` into a fresh leaf value, preserving order.
pub fn from_slice(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}
