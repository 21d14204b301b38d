use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Adds two nodes, recording the backward rule on the result.
///
/// # Errors
/// Returns [`ScalarustError::NonFinite`] if the sum overflows to infinity
/// or degenerates to NaN.
pub fn add_op(a: &Scalar, b: &Scalar) -> Result<Scalar, ScalarustError> {
    let value = a.value() + b.value();
    let grad_fn = AddBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(value, Rc::new(grad_fn), "+")
}

/// d(a+b)/da = 1, d(a+b)/db = 1: the upstream gradient flows through
/// unchanged to both operands.
#[derive(Debug)]
struct AddBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for AddBackward {
    fn backward(&self, upstream: f64) -> Vec<f64> {
        vec![upstream, upstream]
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}
