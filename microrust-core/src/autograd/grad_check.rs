use crate::error::MicroRustError;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicroRustError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicroRustError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf value (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

impl From<MicroRustError> for GradCheckError {
    fn from(err: MicroRustError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call. Each input is
/// perturbed in place by `±epsilon` and restored afterwards; its gradient is
/// left holding the analytical value.
///
/// An input passes when the absolute difference is within `tolerance`, or the
/// difference relative to the analytical gradient is.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicroRustError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    // --- Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- Numerical gradients ---
    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon);
        let loss_plus = func(inputs).map(|out| out.data());
        input.set_data(original - epsilon);
        let loss_minus = func(inputs).map(|out| out.data());
        input.set_data(original);

        let loss_plus = loss_plus.map_err(GradCheckError::ForwardPassError)?;
        let loss_minus = loss_minus.map_err(GradCheckError::ForwardPassError)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        let analytical_grad = analytical_grads[i];

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
