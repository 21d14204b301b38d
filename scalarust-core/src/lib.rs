//! Reverse-mode automatic differentiation over scalar values.
//!
//! The engine records a dynamic computation graph as arithmetic and
//! activation operations execute, and [`Scalar::backward`] walks that
//! graph in reverse post-order to accumulate exact gradients, including
//! over shared subexpressions.

pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;

pub use error::ScalarustError;
pub use scalar::Scalar;
