// microrust-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and `SgdOptimizer`, plain
//! gradient descent with optional momentum and weight decay.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
