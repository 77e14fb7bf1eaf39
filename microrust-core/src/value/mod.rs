// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod operators;
mod traits;

pub use create::from_slice;

/// A scalar node of the computation graph.
///
/// `Value` is a handle around `Rc<RefCell<ValueData>>`:
/// 1.  **Shared Ownership:** a node used as an operand by several results is
///     kept alive by all of them; cloning a `Value` never copies the node.
/// 2.  **Interior Mutability:** `grad` (and `data`, during a training step)
///     are updated through shared handles.
///
/// Arithmetic on `Value`s (`+`, `-`, `*`, `/`, unary `-`, [`pow`](Value::pow),
/// [`exp`](Value::exp), [`tanh`](Value::tanh)) allocates a new node that
/// records its operands, which is how the graph gets built.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    pub(crate) fn borrow_node(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn borrow_node_mut(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }
}

#[cfg(test)]
mod tests;
