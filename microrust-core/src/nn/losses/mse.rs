use crate::error::MicroRustError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = MicroRustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicroRustError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and targets.
///
/// With `Reduction::Sum` this is `Σ (prediction - target)²`, the loss used to
/// train the example network; `Reduction::Mean` divides by the count.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// Targets are constants: each becomes a fresh leaf and receives a
    /// gradient that nobody reads.
    ///
    /// # Errors
    /// `ShapeMismatch` if the slices differ in length, `EmptyInput` if both
    /// are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, MicroRustError> {
        if predictions.len() != targets.len() {
            return Err(MicroRustError::ShapeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(MicroRustError::EmptyInput {
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| (prediction - target).pow(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
