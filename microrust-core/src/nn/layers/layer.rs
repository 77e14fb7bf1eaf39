use crate::error::MicroRustError;
use crate::nn::activation::Activation;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_outputs` neurons reading the same inputs.
///
/// The output of a layer is always one value per neuron. A width-1 output is
/// still a vector; [`forward_scalar`](Layer::forward_scalar) unwraps it when a
/// bare value is wanted.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates a new Layer of `n_outputs` randomly initialized neurons, each
    /// with `n_inputs` inputs. Neurons are initialized in order from `rng`.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, &mut *rng))
            .collect();
        Layer { neurons, n_inputs }
    }

    /// Builds a layer from existing neurons, which must all share the same
    /// fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, MicroRustError> {
        let n_inputs = match neurons.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(MicroRustError::EmptyInput {
                    operation: "Layer::from_neurons".to_string(),
                })
            }
        };
        if let Some(other) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(MicroRustError::DimensionMismatch {
                expected: n_inputs,
                actual: other.n_inputs(),
            });
        }
        Ok(Layer { neurons, n_inputs })
    }

    /// Applies the layer and unwraps its single output.
    ///
    /// Fails with `ShapeMismatch` if the layer has more than one neuron.
    pub fn forward_scalar(&self, inputs: &[Value]) -> Result<Value, MicroRustError> {
        single_output(self.forward(inputs)?, "Layer::forward_scalar")
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        if inputs.len() != self.n_inputs {
            return Err(MicroRustError::DimensionMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.neurons.iter().map(|n| n as &dyn Module).collect()
    }
}

/// Unwraps a width-1 output vector.
pub(crate) fn single_output(
    mut outputs: Vec<Value>,
    operation: &str,
) -> Result<Value, MicroRustError> {
    if outputs.len() != 1 {
        return Err(MicroRustError::ShapeMismatch {
            expected: 1,
            actual: outputs.len(),
            operation: operation.to_string(),
        });
    }
    outputs.pop().ok_or_else(|| MicroRustError::EmptyInput {
        operation: operation.to_string(),
    })
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
