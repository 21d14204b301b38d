use scalarust_core::{Scalar, ScalarustError};

/// Stochastic gradient descent over scalar parameters.
///
/// Updates every parameter `p` according to `p.value -= lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    lr: f64,
}

impl Sgd {
    pub fn new(lr: f64) -> Self {
        Sgd { lr }
    }

    /// Performs a single optimization step.
    ///
    /// # Errors
    /// Propagates [`ScalarustError::NonFinite`] if an update would push a
    /// parameter out of the finite domain; earlier parameters in the slice
    /// keep their already-applied updates.
    pub fn step(&self, params: &[Scalar]) -> Result<(), ScalarustError> {
        for param in params {
            param.set_value(param.value() - self.lr * param.grad())?;
        }
        Ok(())
    }

    /// Clears the gradient accumulators of all given parameters.
    pub fn zero_grad(&self, params: &[Scalar]) {
        for param in params {
            param.zero_grad();
        }
    }
}
