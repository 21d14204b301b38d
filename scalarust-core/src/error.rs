use thiserror::Error;

/// Custom error type for the ScalaRust engine.
///
/// Every variant is raised synchronously at construction or operation time,
/// never during the backward pass. The engine fails fast instead of letting
/// NaN or infinity propagate through the graph.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarustError {
    #[error("non-finite value {value} produced by '{operation}'")]
    NonFinite { value: f64, operation: &'static str },

    #[error("negative base {base} cannot be raised to non-integer exponent {exponent}")]
    NonIntegerExponent { base: f64, exponent: f64 },

    #[error("zero cannot be raised to a negative power")]
    DivisionByZero,
}
