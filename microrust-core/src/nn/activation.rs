use crate::value::Value;

/// Non-linearity applied by a neuron to its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Hyperbolic tangent.
    #[default]
    Tanh,
    /// Identity: the pre-activation is returned as is.
    Linear,
}

impl Activation {
    pub fn apply(&self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Linear => pre_activation.clone(),
        }
    }
}
