//! # Scalar Operations Module (`ops`)
//!
//! Every operator that records a node on a [`Tape`](crate::autograd::Tape).
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a function (`add_op`, `tanh_op`, ...)
//!   that resolves its [`Operand`](crate::var::Operand)s, computes the forward
//!   value and pushes a node tagged with the matching
//!   [`Op`](crate::autograd::Op). The backward rules live with `Op` itself.
//! - The `std::ops` overloads and the methods on [`Var`](crate::Var) are thin
//!   wrappers around these functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh, relu.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
