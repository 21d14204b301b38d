use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use crate::scalar::Scalar;
use std::rc::Rc;

/// Hyperbolic tangent activation. The output lies strictly inside (-1, 1)
/// for every finite input.
pub fn tanh_op(input: &Scalar) -> Result<Scalar, ScalarustError> {
    let t = input.value().tanh();
    let grad_fn = TanhBackward {
        input: input.clone(),
        output: t,
    };
    Scalar::from_op(t, Rc::new(grad_fn), "tanh")
}

impl Scalar {
    /// Applies tanh to this node, see [`tanh_op`].
    pub fn tanh(&self) -> Result<Scalar, ScalarustError> {
        tanh_op(self)
    }
}

/// d(tanh x)/dx = 1 - tanh(x)^2, using the forward output captured at
/// construction.
#[derive(Debug)]
struct TanhBackward {
    input: Scalar,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, upstream: f64) -> Vec<f64> {
        vec![(1.0 - self.output * self.output) * upstream]
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_tanh_forward() {
        let x = Scalar::new(0.5).unwrap();
        let y = tanh_op(&x).unwrap();
        assert_relative_eq!(y.value(), 0.5_f64.tanh(), max_relative = 1e-12);
        assert_eq!(y.op(), "tanh");
    }

    #[test]
    fn test_tanh_open_interval() {
        for v in [-5.0, -1.0, 0.0, 1.0, 5.0] {
            let y = Scalar::new(v).unwrap().tanh().unwrap();
            assert!(y.value() > -1.0 && y.value() < 1.0, "tanh({}) = {}", v, y.value());
        }
    }

    #[test]
    fn test_tanh_is_odd() {
        for v in [0.1, 0.9, 2.3, 11.0] {
            let pos = Scalar::new(v).unwrap().tanh().unwrap();
            let neg = Scalar::new(-v).unwrap().tanh().unwrap();
            assert_abs_diff_eq!(pos.value(), -neg.value(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_tanh_backward() {
        let x = Scalar::new(0.5).unwrap();
        let y = tanh_op(&x).unwrap();
        y.backward();
        let t = 0.5_f64.tanh();
        assert_relative_eq!(x.grad(), 1.0 - t * t, max_relative = 1e-12);
    }

    #[test]
    fn test_tanh_at_zero_has_unit_gradient() {
        let x = Scalar::new(0.0).unwrap();
        let y = x.tanh().unwrap();
        assert_eq!(y.value(), 0.0);
        y.backward();
        assert_eq!(x.grad(), 1.0);
    }
}
