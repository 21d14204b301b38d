use crate::autograd::graph::topological_sort;
use crate::scalar::Scalar;

impl Scalar {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes d(self)/d(n) for every ancestor `n` reachable through
    /// parent edges and accumulates the result into each node's `grad`
    /// field. Afterwards gradients are read directly from node state.
    ///
    /// The pass seeds `self.grad = 1.0` (d(self)/d(self)) and then walks
    /// the graph in reverse post-order, so every consumer of a node has
    /// fully contributed to that node's accumulator before the node
    /// propagates to its own parents. That ordering is what makes gradient
    /// accumulation over shared subexpressions correct.
    ///
    /// No gradient other than the seed is reset here. Gradients therefore
    /// accumulate across repeated backward passes over reused nodes;
    /// callers that want independent passes must zero the relevant
    /// accumulators first (see [`Scalar::zero_grad`]). This mirrors
    /// conventional autodiff accumulation semantics and is deliberate.
    pub fn backward(&self) {
        let order = topological_sort(self);
        log::debug!(
            "backward from {:?}: traversing {} nodes",
            self,
            order.len()
        );

        self.borrow_data_mut().grad = 1.0;

        for node in order.iter().rev() {
            let (grad, grad_fn) = {
                let data = node.borrow_data();
                (data.grad, data.grad_fn.clone())
            };
            let Some(grad_fn) = grad_fn else { continue };

            let inputs = grad_fn.inputs();
            let local_grads = grad_fn.backward(grad);
            debug_assert_eq!(
                local_grads.len(),
                inputs.len(),
                "backward rule for '{}' returned a gradient count that does not match its inputs",
                node.op()
            );
            for (input, local) in inputs.iter().zip(local_grads) {
                input.borrow_data_mut().grad += local;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::{add::add_op, mul::mul_op};
    use crate::scalar::Scalar;

    #[test]
    fn test_backward_on_leaf_seeds_one() {
        let a = Scalar::new(5.0).unwrap();
        a.backward();
        assert_eq!(a.grad(), 1.0);
    }

    #[test]
    fn test_backward_simple_chain() {
        let a = Scalar::new(2.0).unwrap();
        let b = Scalar::new(3.0).unwrap();
        let c = mul_op(&a, &b).unwrap();
        c.backward();
        assert_eq!(c.grad(), 1.0);
        assert_eq!(a.grad(), 3.0);
        assert_eq!(b.grad(), 2.0);
    }

    #[test]
    fn test_backward_accumulates_across_passes_without_reset() {
        let x = Scalar::new(1.0).unwrap();
        let three = Scalar::new(3.0).unwrap();
        let f1 = mul_op(&x, &three).unwrap();
        f1.backward();
        assert_eq!(x.grad(), 3.0);

        // Second pass over a fresh graph, without zeroing: contributions add.
        let f2 = mul_op(&x, &three).unwrap();
        f2.backward();
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_backward_square_via_repeated_operand() {
        // f = x * x -> df/dx = 2x
        let x = Scalar::new(3.0).unwrap();
        let f = mul_op(&x, &x).unwrap();
        f.backward();
        assert_eq!(x.grad(), 6.0);
    }

    #[test]
    fn test_backward_diamond() {
        let a = Scalar::new(2.0).unwrap();
        let b = Scalar::new(-3.0).unwrap();
        let ab = mul_op(&a, &b).unwrap();
        let f = add_op(&ab, &ab).unwrap();
        f.backward();
        assert_eq!(a.grad(), 2.0 * b.value());
        assert_eq!(b.grad(), 2.0 * a.value());
    }
}
