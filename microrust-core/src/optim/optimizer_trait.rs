use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// gradients. They hold shallow handles to the parameters they manage, so the
/// updates are visible through the owning module.
pub trait Optimizer {
    /// Performs a single optimization step, reading each parameter's `grad`
    /// and updating its `data` in place.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training
    /// iteration, since `backward()` accumulates into existing gradients.
    fn zero_grad(&mut self);

    /// Returns the parameters managed by the optimizer, in registration order.
    fn params(&self) -> &[Parameter];
}
