use scalarust_core::ScalarustError;
use thiserror::Error;

/// Errors raised by the network-composition layer.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarustNnError {
    #[error("input length {actual} does not match expected arity {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("network topology needs at least two layer sizes, got {0}")]
    InvalidTopology(usize),

    #[error(transparent)]
    Scalar(#[from] ScalarustError),
}
