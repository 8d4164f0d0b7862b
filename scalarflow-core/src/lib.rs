//! Scalar-valued reverse-mode automatic differentiation and a minimal
//! feed-forward neural-network library built on it.
//!
//! Expressions are recorded on a [`Tape`] through [`Var`] handles; calling
//! [`Var::backward`] on any node fills the gradient of every node it depends on.

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod var;

pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

// Ré-exporte les types principaux pour `scalarflow_core::Tape` etc.
pub use autograd::{NodeId, Op, Tape, TapeMark};
pub use error::ScalarFlowError;
pub use var::{Operand, Var};
