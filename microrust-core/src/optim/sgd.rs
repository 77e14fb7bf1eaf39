use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Updates every parameter `p` according to
/// `p.data -= lr * (p.grad + weight_decay * p.data)`, optionally smoothed by
/// a momentum buffer.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One buffer per parameter, same order as `params`.
    momentum_buffers: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new plain `SgdOptimizer` (no momentum, no weight decay).
    ///
    /// # Arguments
    ///
    /// * `params`: Parameters to optimize; clones of a module's parameters
    ///   share their values.
    /// * `lr`: The learning rate.
    pub fn new<'a>(params: impl IntoIterator<Item = &'a Parameter>, lr: f64) -> Self {
        Self::with_options(params, lr, 0.0, 0.0)
    }

    /// Creates a new `SgdOptimizer` with momentum and L2 weight decay.
    pub fn with_options<'a>(
        params: impl IntoIterator<Item = &'a Parameter>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Self {
        let params: Vec<Parameter> = params.into_iter().cloned().collect();
        let momentum_buffers = vec![0.0; params.len()];
        SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) {
        debug!("SgdOptimizer: step() called on {} params, lr = {}", self.params.len(), self.lr);
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.data();
            }
            if self.momentum != 0.0 {
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }
            param.set_data(param.data() - self.lr * d_p);
        }
    }

    fn zero_grad(&mut self) {
        debug!("SgdOptimizer: zero_grad() called");
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn params(&self) -> &[Parameter] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
