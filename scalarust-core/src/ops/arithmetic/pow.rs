use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Raises a node to a plain numeric exponent (the exponent is not a node
/// and receives no gradient).
///
/// # Errors
/// - [`ScalarustError::NonIntegerExponent`] if the base is negative and the
///   exponent is not an integer (undefined over the reals).
/// - [`ScalarustError::DivisionByZero`] if the base is exactly zero and the
///   exponent is negative.
/// - [`ScalarustError::NonFinite`] if the result overflows.
pub fn pow_op(base: &Scalar, exponent: f64) -> Result<Scalar, ScalarustError> {
    let base_value = base.value();
    if base_value < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarustError::NonIntegerExponent {
            base: base_value,
            exponent,
        });
    }
    if base_value == 0.0 && exponent < 0.0 {
        return Err(ScalarustError::DivisionByZero);
    }

    let value = base_value.powf(exponent);
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Scalar::from_op(value, Rc::new(grad_fn), "**")
}

impl Scalar {
    /// `self` raised to `exponent`, see [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Result<Scalar, ScalarustError> {
        pow_op(self, exponent)
    }
}

/// d(x^n)/dx = n * x^(n-1).
#[derive(Debug)]
struct PowBackward {
    base: Scalar,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, upstream: f64) -> Vec<f64> {
        let n = self.exponent;
        vec![n * self.base.value().powf(n - 1.0) * upstream]
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.base.clone()]
    }
}
