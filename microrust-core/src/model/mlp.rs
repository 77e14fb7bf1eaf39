use crate::error::MicroRustError;
use crate::nn::activation::Activation;
use crate::nn::layers::layer::{single_output, Layer};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence, each layer's output
/// width feeding the next layer's input width.
#[derive(Debug, Clone)]
pub struct MLP {
    layers: Vec<Layer>,
    n_inputs: usize,
}

impl MLP {
    /// Creates a new MLP with tanh activations on every layer.
    ///
    /// # Arguments
    ///
    /// * `n_inputs` - Width of the input vector.
    /// * `layer_sizes` - Number of neurons in each layer, first to last.
    /// * `rng` - Random source used to initialize all parameters, layer by layer.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(fan_in, size, Activation::Tanh, &mut *rng));
            fan_in = size;
        }
        MLP { layers, n_inputs }
    }

    /// Builds a network from existing layers.
    ///
    /// Fails with `DimensionMismatch` when a layer's fan-in differs from the
    /// previous layer's width, and with `EmptyInput` for an empty list.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, MicroRustError> {
        let n_inputs = match layers.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(MicroRustError::EmptyInput {
                    operation: "MLP::from_layers".to_string(),
                })
            }
        };
        for pair in layers.windows(2) {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(MicroRustError::DimensionMismatch {
                    expected: pair[0].n_outputs(),
                    actual: pair[1].n_inputs(),
                });
            }
        }
        Ok(MLP { layers, n_inputs })
    }

    /// Runs the network and unwraps its single output.
    ///
    /// Fails with `ShapeMismatch` if the last layer is wider than one neuron.
    pub fn forward_scalar(&self, inputs: &[Value]) -> Result<Value, MicroRustError> {
        single_output(self.forward(inputs)?, "MLP::forward_scalar")
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(self.n_inputs, Layer::n_outputs)
    }
}

impl Module for MLP {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        if inputs.len() != self.n_inputs {
            return Err(MicroRustError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.layers.iter().map(|l| l as &dyn Module).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
