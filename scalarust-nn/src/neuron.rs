use crate::activation::Activation;
use crate::error::ScalarustNnError;
use crate::module::Module;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use scalarust_core::ops::arithmetic::{add_op, mul_op};
use scalarust_core::Scalar;
use std::fmt;

/// A single perceptron: `activation(bias + sum(w_i * x_i))`.
///
/// Weights use He-style initialization, drawn from a Gaussian with standard
/// deviation `sqrt(2 / fan_in)`; the bias starts at zero.
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
    activation: Activation,
}

impl Neuron {
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarustNnError> {
        let sigma = (2.0 / in_features as f64).sqrt();
        let dist = Normal::new(0.0, sigma)
            .expect("He-init standard deviation is non-negative");
        let mut weights = Vec::with_capacity(in_features);
        for _ in 0..in_features {
            weights.push(Scalar::new(dist.sample(rng))?);
        }
        let bias = Scalar::new(0.0)?;
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Number of inputs this neuron expects.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Builds the forward graph for one evaluation: the weighted sum flows
    /// through fresh nodes, so each call produces an independent graph over
    /// the shared parameter leaves.
    pub fn forward(&self, inputs: &[Scalar]) -> Result<Scalar, ScalarustNnError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarustNnError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let mut acc = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            let term = mul_op(w, x)?;
            acc = add_op(&acc, &term)?;
        }
        Ok(self.activation.apply(&acc)?)
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Scalar> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Debug for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Neuron({} weights, {:?})",
            self.weights.len(),
            self.activation
        )
    }
}
