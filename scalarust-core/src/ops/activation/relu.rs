use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Rectified Linear Unit activation: max(0, x).
pub fn relu_op(input: &Scalar) -> Result<Scalar, ScalarustError> {
    let x = input.value();
    let value = if x > 0.0 { x } else { 0.0 };
    let grad_fn = ReluBackward {
        input: input.clone(),
    };
    Scalar::from_op(value, Rc::new(grad_fn), "ReLU")
}

impl Scalar {
    /// Applies ReLU to this node, see [`relu_op`].
    pub fn relu(&self) -> Result<Scalar, ScalarustError> {
        relu_op(self)
    }
}

/// Sub-gradient convention: 1 for x > 0, 0 for x <= 0 (the kink at exactly
/// zero passes no gradient).
#[derive(Debug)]
struct ReluBackward {
    input: Scalar,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, upstream: f64) -> Vec<f64> {
        let passthrough = if self.input.value() > 0.0 { upstream } else { 0.0 };
        vec![passthrough]
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}
