use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Multiplies two nodes, recording the product-rule backward rule on the
/// result.
///
/// Underflow to exactly 0.0 is a valid outcome; overflow to infinity is
/// rejected with [`ScalarustError::NonFinite`].
pub fn mul_op(a: &Scalar, b: &Scalar) -> Result<Scalar, ScalarustError> {
    let value = a.value() * b.value();
    let grad_fn = MulBackward {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    Scalar::from_op(value, Rc::new(grad_fn), "*")
}

/// Product rule: d(ab)/da = b, d(ab)/db = a. Operand values are read at
/// backward time, matching the forward values because operations never
/// mutate existing nodes.
#[derive(Debug)]
struct MulBackward {
    lhs: Scalar,
    rhs: Scalar,
}

impl BackwardOp for MulBackward {
    fn backward(&self, upstream: f64) -> Vec<f64> {
        vec![
            self.rhs.value() * upstream,
            self.lhs.value() * upstream,
        ]
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}
