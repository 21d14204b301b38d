use crate::scalar::Scalar;
use std::fmt::Debug;

pub mod grad_check;
pub mod graph;

/// The backward rule of a differentiable operation.
///
/// Every operation that builds a non-leaf [`Scalar`] stores one of these in
/// the result node's `grad_fn` field. During [`Scalar::backward`] the rule
/// receives the gradient that has accumulated on the result node and
/// distributes the correctly scaled contribution to each operand.
///
/// Backward rules are infallible: all domain violations (non-finite values,
/// undefined power combinations) are rejected at forward time, so by the
/// time a rule runs its captured operands are known-good.
pub trait BackwardOp: Debug {
    /// Computes the local gradient contribution for each input, given the
    /// gradient flowing into the operation's output.
    ///
    /// The returned vector holds one entry per input, in the same order as
    /// [`BackwardOp::inputs`]. The caller accumulates each entry additively
    /// into the matching input's `grad` field.
    fn backward(&self, upstream: f64) -> Vec<f64>;

    /// Handles to the operand nodes of the forward operation, in the order
    /// matching the gradients returned by [`BackwardOp::backward`].
    fn inputs(&self) -> Vec<Scalar>;
}
