//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable primitive lives here, grouped by kind.
//!
//! - **`_op` Functions:** each primitive has a function (`add_op`, `pow_op`, ...)
//!   that computes the forward value and allocates the result node. They are
//!   also reachable through operator overloading on [`Value`](crate::Value).
//! - **`Backward` Structs:** each primitive has a struct (`AddBackward`,
//!   `PowBackward`, ...) implementing [`BackwardOp`](crate::autograd::BackwardOp)
//!   with its local-derivative rule.
//! - Composite operations (`sub_op`, `div_op`, `tanh_op`) have no backward
//!   struct of their own: they are built from the primitives and the chain
//!   rule follows automatically.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
