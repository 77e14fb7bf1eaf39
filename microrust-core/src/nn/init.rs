use crate::nn::parameter::Parameter;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Default lower bound of freshly initialized weights and biases.
pub const INIT_LOW: f64 = -1.0;
/// Default upper bound of freshly initialized weights and biases.
pub const INIT_HIGH: f64 = 1.0;

/// Fills the parameter with a value drawn uniformly from `[low, high]`.
///
/// Operates in-place on `data`; the gradient is left untouched.
///
/// # Panics
/// Panics if `low > high`.
pub fn uniform_<R: Rng + ?Sized>(param: &Parameter, low: f64, high: f64, rng: &mut R) {
    let distribution = Uniform::new_inclusive(low, high);
    param.set_data(distribution.sample(rng));
}

/// Creates `count` parameters initialized uniformly in `[INIT_LOW, INIT_HIGH]`.
pub fn uniform_parameters<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Parameter> {
    (0..count)
        .map(|_| {
            let param = Parameter::new(0.0);
            uniform_(&param, INIT_LOW, INIT_HIGH, &mut *rng);
            param
        })
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
