//! # Activation Functions
//!
//! Non-linearities applied by neurons. They are composite operations: no
//! dedicated backward struct, gradients come from the primitives they use.

pub mod tanh;

pub use tanh::tanh_op;
