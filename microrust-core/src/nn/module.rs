use crate::error::MicroRustError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// This trait defines the fundamental operations that any module supports:
/// a forward pass over a vector of values and access to its parameters.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// Every call builds a new graph on top of the module's parameters.
    ///
    /// # Arguments
    /// * `inputs`: one value per input feature.
    ///
    /// # Returns
    /// One value per output feature, or `MicroRustError::DimensionMismatch` if
    /// `inputs` does not match the module's fan-in.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError>;

    /// Returns all learnable parameters of the module, including those of
    /// sub-modules.
    ///
    /// The order is stable across calls: training loops zip it with other
    /// per-parameter state.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with their names.
    /// Names follow the module hierarchy (e.g. "layers.0.neurons.2.bias"), in
    /// the same order as `parameters()`.
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Returns the direct child modules. Empty for modules without children.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
