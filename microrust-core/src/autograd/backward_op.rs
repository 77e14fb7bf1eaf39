use std::fmt::{self, Debug};

/// Identifies the primitive operation that produced a non-leaf value.
///
/// The `Display` form is the short tag used when rendering graphs
/// (`+`, `*`, `**2`, `neg`, `exp`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Add,
    Mul,
    /// Power by a constant exponent.
    Pow(f64),
    Neg,
    Exp,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(exponent) => write!(f, "**{}", exponent),
            OpKind::Neg => write!(f, "neg"),
            OpKind::Exp => write!(f, "exp"),
        }
    }
}

/// Defines the local-derivative rule of a differentiable primitive.
///
/// Every operation that creates a non-leaf `Value` stores an implementation
/// of this trait in the result's `grad_fn`. During `backward()` it is used to
/// push the result's gradient down to the operands according to the chain
/// rule.
pub trait BackwardOp: Debug {
    /// Tag of the primitive, exposed through [`Value::op`](crate::Value::op).
    fn kind(&self) -> OpKind;

    /// Computes the contribution to each operand's gradient.
    ///
    /// Mathematically, for `output = f(input_1, ..., input_n)` this returns
    /// `grad_output * d(output)/d(input_i)` for every `i`, evaluated at the
    /// current forward values.
    ///
    /// # Arguments
    /// * `grad_output`: gradient accumulated on the result node.
    /// * `output`: the result node's `data`.
    /// * `inputs`: the operands' `data`, in operand order.
    ///
    /// # Returns
    /// One contribution per operand, in the same order as `inputs`. The caller
    /// adds them to the operands' gradients; it never overwrites.
    fn backward(&self, grad_output: f64, output: f64, inputs: &[f64]) -> Vec<f64>;
}
