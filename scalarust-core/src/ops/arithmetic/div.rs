use crate::error::ScalarustError;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use crate::scalar::Scalar;

/// Division, defined as `a * b^-1`. Dividing by zero therefore surfaces as
/// the power-domain error [`ScalarustError::DivisionByZero`].
pub fn div_op(a: &Scalar, b: &Scalar) -> Result<Scalar, ScalarustError> {
    let b_inv = pow_op(b, -1.0)?;
    mul_op(a, &b_inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward() {
        let a = Scalar::new(9.0).unwrap();
        let b = Scalar::new(4.0).unwrap();
        let c = div_op(&a, &b).unwrap();
        assert_eq!(c.value(), 2.25);
    }

    #[test]
    fn test_div_backward() {
        // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
        let a = Scalar::new(9.0).unwrap();
        let b = Scalar::new(4.0).unwrap();
        let c = div_op(&a, &b).unwrap();
        c.backward();
        assert_relative_eq!(a.grad(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(b.grad(), -9.0 / 16.0, max_relative = 1e-12);
    }

    #[test]
    fn test_div_by_zero_rejected() {
        let a = Scalar::new(1.0).unwrap();
        let b = Scalar::new(0.0).unwrap();
        match div_op(&a, &b) {
            Err(ScalarustError::DivisionByZero) => {}
            other => panic!("expected DivisionByZero, got {:?}", other),
        }
    }
}
