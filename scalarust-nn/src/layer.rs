use crate::activation::Activation;
use crate::error::ScalarustNnError;
use crate::module::Module;
use crate::neuron::Neuron;
use rand::Rng;
use scalarust_core::Scalar;
use std::fmt;

/// A dense layer: a collection of neurons sharing the same input vector.
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarustNnError> {
        let mut neurons = Vec::with_capacity(out_features);
        for _ in 0..out_features {
            neurons.push(Neuron::new(in_features, activation, rng)?);
        }
        Ok(Layer { neurons })
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, ScalarustNnError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Scalar> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer({}x{:?})", self.neurons.len(), self.neurons.first())
    }
}
