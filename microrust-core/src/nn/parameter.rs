use crate::error::MicroRustError;
use crate::value::Value;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf `Value` marking it as a learnable parameter of a
/// Module.
///
/// Parameters persist across training iterations: each forward pass builds a
/// new graph on top of them, and only their `data` changes between passes.
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new Parameter holding a fresh leaf value.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Creates a new labeled Parameter.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Parameter(Value::with_label(data, label))
    }

    /// Returns the underlying value handle.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Wraps an existing value. Only leaves can become parameters: an interior
/// node's `data` is recomputed by every forward pass.
impl TryFrom<Value> for Parameter {
    type Error = MicroRustError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.op() {
            Some(op) => Err(MicroRustError::NonLeafParameter { op: op.to_string() }),
            None => Ok(Parameter(value)),
        }
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    /// Cloning a Parameter clones the handle (shallow clone via Rc).
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Parameter {}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
