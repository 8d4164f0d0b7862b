//! The reverse-mode autodiff engine: the node arena, the per-operation
//! backward rules and the traversal that orders them.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod tape;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use tape::{NodeId, Tape, TapeMark};
