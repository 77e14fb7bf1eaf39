// src/value/traits.rs

use crate::value::Value;
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the returned handle points to the same node.
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.borrow_node();
        let op = node.grad_fn.as_ref().map(|grad_fn| grad_fn.kind().to_string());
        write!(
            f,
            "Value(data={}, grad={}, op={:?}, label={:?}, operands={})",
            node.data,
            node.grad,
            op,
            node.label,
            node.operands.len()
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

/// Two handles are equal when they point to the same node.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

/// Sums values left to right through `+` nodes. An empty iterator yields a
/// fresh zero leaf.
impl Sum<Value> for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| &acc + &v),
            None => Value::zero(),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}
