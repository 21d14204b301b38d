use scalarust_core::{Scalar, ScalarustError};

/// Nonlinearity applied by every neuron of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Tanh,
    Relu,
}

impl Activation {
    pub fn apply(&self, x: &Scalar) -> Result<Scalar, ScalarustError> {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_tanh() {
        let x = Scalar::new(0.5).unwrap();
        let y = Activation::Tanh.apply(&x).unwrap();
        assert_eq!(y.value(), 0.5_f64.tanh());
    }

    #[test]
    fn test_apply_relu() {
        let x = Scalar::new(-0.5).unwrap();
        let y = Activation::Relu.apply(&x).unwrap();
        assert_eq!(y.value(), 0.0);
    }
}
