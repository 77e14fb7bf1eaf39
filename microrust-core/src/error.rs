use thiserror::Error;

/// Custom error type for the microrust engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroRustError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received no values")]
    EmptyInput { operation: String },

    #[error("A parameter must wrap a leaf value, but this value was produced by `{op}`")]
    NonLeafParameter { op: String },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,
}
