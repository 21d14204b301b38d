//! Multi-layer perceptron composed purely from `scalarust-core` nodes.
//!
//! Neurons, layers, and the network carry no differentiation logic of their
//! own: they instantiate scalar nodes, wire them through the core's
//! operations, and read gradients back out after `backward()`.

pub mod activation;
pub mod error;
pub mod layer;
pub mod losses;
pub mod module;
pub mod network;
pub mod neuron;
pub mod sgd;

pub use activation::Activation;
pub use error::ScalarustNnError;
pub use layer::Layer;
pub use module::Module;
pub use network::Network;
pub use neuron::Neuron;
pub use sgd::Sgd;
