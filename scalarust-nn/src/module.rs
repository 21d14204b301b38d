use scalarust_core::Scalar;

/// The base trait shared by neurons, layers, and whole networks.
///
/// Forward signatures differ per level (a neuron emits one scalar, a layer
/// a vector), so the trait only covers the parameter surface that training
/// loops rely on.
pub trait Module {
    /// Handles to every learnable parameter, in a stable order.
    fn parameters(&self) -> Vec<Scalar>;

    /// Resets every parameter's gradient accumulator to zero. Required
    /// between backward passes that should be independent, since gradients
    /// accumulate additively by design.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
