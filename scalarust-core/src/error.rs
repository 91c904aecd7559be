use thiserror::Error;

/// Custom error type for the scalarust framework.
///
/// Every variant is a caller error (a violated precondition). Numerical edge
/// cases such as `0.0.powf(-1.0)` are never reported here; they flow through
/// the graph as NaN/Infinity.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarustError {
    #[error("Length mismatch during {operation}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid node id {id}: not a live node of this graph ({len} nodes)")]
    InvalidNode { id: usize, len: usize },

    #[error("Invalid checkpoint {mark}: graph only holds {len} nodes")]
    InvalidCheckpoint { mark: usize, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation requires at least one input node")]
    EmptyInput,

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}
