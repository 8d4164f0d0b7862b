use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the ScalarFlow engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarFlowError {
    /// The power operator only accepts a numeric exponent.
    #[error("Invalid exponent: exponent must be a numeric literal, got a graph node with data {exponent}")]
    InvalidExponent { exponent: f64 },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Operation '{operation}' requires at least one element")]
    EmptyInput { operation: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    /// The node was dropped from its tape by a rewind.
    #[error("Node {id:?} does not exist on the tape (was the tape rewound?)")]
    NodeNotFound { id: NodeId },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid initializer: {0}")]
    InvalidInit(String),
}
