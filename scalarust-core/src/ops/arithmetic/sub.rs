use crate::error::ScalarustError;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::scalar::Scalar;

/// Subtraction, defined as `a + (-1 * b)`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Result<Scalar, ScalarustError> {
    let neg_b = neg_op(b)?;
    add_op(a, &neg_b)
}
