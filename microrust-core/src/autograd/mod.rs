//! Reverse-mode automatic differentiation.
//!
//! - [`backward_op`]: the `BackwardOp` trait implemented once per primitive,
//!   and the public `OpKind` tag.
//! - [`graph`]: topological ordering, the backward pass and read-only graph
//!   tracing.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, OpKind};
pub use graph::{backward, build_topo, trace, GraphTrace, NodeId};
