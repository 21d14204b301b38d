use crate::error::ScalarustError;
use crate::ops::arithmetic::mul::mul_op;
use crate::scalar::Scalar;

/// Negation, defined as `a * -1`. The result inherits the product-rule
/// backward behavior; the constant factor is a fresh leaf with no gradient
/// consumer.
pub fn neg_op(a: &Scalar) -> Result<Scalar, ScalarustError> {
    let minus_one = Scalar::new(-1.0)?;
    mul_op(a, &minus_one)
}
