// Differentiable operations over Scalar nodes, one file per operation.

pub mod activation;
pub mod arithmetic;
