use crate::activation::Activation;
use crate::error::ScalarustNnError;
use crate::layer::Layer;
use crate::module::Module;
use rand::Rng;
use scalarust_core::Scalar;
use std::fmt;

/// A multi-layer perceptron: dense layers stacked according to `sizes`,
/// every neuron applying the same activation.
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from consecutive layer sizes, e.g. `[3, 4, 1]` for
    /// 3 inputs, one hidden layer of 4, and a single output. Parameters are
    /// drawn from `rand::thread_rng()`; use [`Network::with_rng`] for a
    /// reproducible build.
    ///
    /// # Errors
    /// [`ScalarustNnError::InvalidTopology`] unless `sizes` has at least
    /// two entries.
    pub fn new(sizes: &[usize], activation: Activation) -> Result<Self, ScalarustNnError> {
        Network::with_rng(sizes, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarustNnError> {
        if sizes.len() < 2 {
            return Err(ScalarustNnError::InvalidTopology(sizes.len()));
        }
        let mut layers = Vec::with_capacity(sizes.len() - 1);
        for window in sizes.windows(2) {
            layers.push(Layer::new(window[0], window[1], activation, rng)?);
        }
        log::debug!(
            "built network {:?} with {} parameters",
            sizes,
            layers.iter().map(|l| l.parameters().len()).sum::<usize>()
        );
        Ok(Network { layers })
    }

    /// Promotes raw inputs to leaf nodes and builds a fresh forward graph
    /// through every layer. Returns one `Scalar` per output neuron.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<Scalar>, ScalarustNnError> {
        let mut activations = inputs
            .iter()
            .map(|&v| Scalar::new(v))
            .collect::<Result<Vec<_>, _>>()?;
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}

impl Module for Network {
    fn parameters(&self) -> Vec<Scalar> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.layers.iter().map(|l| l.out_features()).collect();
        write!(f, "Network({:?})", widths)
    }
}
