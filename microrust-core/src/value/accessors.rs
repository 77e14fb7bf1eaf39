// src/value/accessors.rs

use crate::autograd::{NodeId, OpKind};
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the current forward value.
    pub fn data(&self) -> f64 {
        self.borrow_node().data
    }

    /// Overwrites the forward value in place.
    ///
    /// Meant for parameter updates between training iterations; results that
    /// were already computed from this node keep their old `data`.
    pub fn set_data(&self, data: f64) {
        self.borrow_node_mut().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.borrow_node().grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.borrow_node_mut().grad = grad;
    }

    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.borrow_node_mut().grad += contribution;
    }

    pub fn label(&self) -> String {
        self.borrow_node().label.clone()
    }

    /// Sets the display label. Labels have no effect on computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.borrow_node_mut().label = label.into();
    }

    /// Builder-style variant of [`set_label`](Value::set_label).
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Returns the primitive that produced this value, `None` for leaves.
    pub fn op(&self) -> Option<OpKind> {
        self.borrow_node().grad_fn.as_ref().map(|grad_fn| grad_fn.kind())
    }

    /// Returns shallow clones of the operands, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        self.borrow_node().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.borrow_node().is_leaf()
    }

    /// Identity of the underlying node; shared by every clone of this handle.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.node))
    }
}
