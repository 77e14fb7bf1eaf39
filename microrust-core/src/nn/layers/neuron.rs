use crate::error::MicroRustError;
use crate::nn::activation::Activation;
use crate::nn::init::{uniform_, uniform_parameters, INIT_HIGH, INIT_LOW};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(Σ wᵢ·xᵢ + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a new Neuron with `n_inputs` weights and a bias, all drawn
    /// uniformly from `[-1, 1]` (weights first, then bias).
    ///
    /// # Arguments
    ///
    /// * `n_inputs` - Number of input features.
    /// * `activation` - Non-linearity applied to the weighted sum.
    /// * `rng` - Random source; pass a seeded generator for reproducible runs.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, activation: Activation, rng: &mut R) -> Self {
        let weights = uniform_parameters(n_inputs, rng);
        let bias = Parameter::new(0.0);
        uniform_(&bias, INIT_LOW, INIT_HIGH, rng);
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a Neuron with explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    /// Computes the neuron's output for one input vector.
    ///
    /// The weighted sum starts from the bias and adds each `wᵢ·xᵢ` in order.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, MicroRustError> {
        if inputs.len() != self.weights.len() {
            return Err(MicroRustError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.as_value().clone(), |acc, (w, x)| {
                &acc + &(w.as_value() * x)
            });
        Ok(self.activation.apply(&pre_activation))
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicroRustError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), &self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
