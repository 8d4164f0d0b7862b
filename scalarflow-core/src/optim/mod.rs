// scalarflow-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and the SGD implementation.
//! Optimizers run outside the autodiff engine: they only read gradients and
//! write parameter data.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
