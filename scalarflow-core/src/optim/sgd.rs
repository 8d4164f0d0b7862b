use crate::autograd::NodeId;
use crate::optim::optimizer_trait::Optimizer;
use crate::var::Var;
use log::debug;
use std::collections::HashMap;

/// Implements Stochastic Gradient Descent (SGD).
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (v = d on the first step)
/// p = p - lr * v
/// ```
///
/// With the defaults (no momentum, no weight decay) this is plain gradient
/// descent, `p -= lr * g`.
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // Velocity per parameter node, only populated when momentum != 0.
    momentum_buffers: HashMap<NodeId, f64>,
}

impl Sgd {
    pub fn new(lr: f64) -> Self {
        Sgd {
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &[Var<'_>]) {
        debug!("Sgd: step over {} parameters, lr = {}", params.len(), self.lr);
        for param in params {
            let data = param.data();
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * data;
            }
            if self.momentum != 0.0 {
                let momentum = self.momentum;
                let velocity = self
                    .momentum_buffers
                    .entry(param.id())
                    .and_modify(|v| *v = momentum * *v + d_p)
                    .or_insert(d_p);
                d_p = *velocity;
            }
            param.set_data(data - self.lr * d_p);
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
