//! # Activation Functions
//!
//! Non-linearities used by the neurons of the `nn` module.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent (used by [`Neuron`](crate::nn::Neuron)).
//! - [`relu_op`]: Rectified Linear Unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
