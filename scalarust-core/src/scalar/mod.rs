use crate::autograd::BackwardOp;
use crate::error::ScalarustError;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub mod autograd_methods;
pub mod traits;

/// Internal state of a graph node, shared behind `Rc<RefCell<...>>`.
///
/// `value` is written once at construction (operations always build a new
/// node) and is only reassigned afterwards through [`Scalar::set_value`],
/// the explicit mutation hook used by training loops and gradient checking.
pub struct ScalarData {
    pub value: f64,
    /// Accumulator for d(output)/d(self). Mutated by the backward pass and
    /// by explicit resets; forward construction never touches it.
    pub grad: f64,
    /// Backward rule recorded by the operation that produced this node.
    /// `None` for leaves.
    pub grad_fn: Option<Rc<dyn BackwardOp>>,
    /// Diagnostic label of the producing operation. Not used for correctness.
    pub op: &'static str,
}

/// A differentiable scalar: one node of the dynamically built computation
/// graph.
///
/// `Scalar` is a cheap handle over shared node state. Cloning a `Scalar`
/// clones the handle, not the node: both handles refer to the same `value`
/// and `grad` accumulator. A node may therefore be held simultaneously by
/// the graph edges that reference it and by external owners such as a
/// parameter list.
///
/// Graph identity is per-handle-target, not per-value: two nodes carrying
/// the same number are distinct entities, see [`Scalar::ptr_eq`].
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

/// Stable identity of a node, used as the key of visited sets during graph
/// traversal.
pub(crate) type NodeId = *const RefCell<ScalarData>;

impl Scalar {
    /// Creates a leaf node wrapping a raw number.
    ///
    /// # Errors
    /// Returns [`ScalarustError::NonFinite`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Scalar, ScalarustError> {
        Scalar::from_parts(value, None, "")
    }

    /// Creates the result node of an operation. Validates the forward value
    /// exactly like leaf construction: an operation whose output overflows
    /// to infinity or degenerates to NaN fails here instead of poisoning
    /// the graph.
    pub(crate) fn from_op(
        value: f64,
        grad_fn: Rc<dyn BackwardOp>,
        op: &'static str,
    ) -> Result<Scalar, ScalarustError> {
        Scalar::from_parts(value, Some(grad_fn), op)
    }

    fn from_parts(
        value: f64,
        grad_fn: Option<Rc<dyn BackwardOp>>,
        op: &'static str,
    ) -> Result<Scalar, ScalarustError> {
        if !value.is_finite() {
            let operation = if op.is_empty() { "new" } else { op };
            return Err(ScalarustError::NonFinite { value, operation });
        }
        Ok(Scalar {
            data: Rc::new(RefCell::new(ScalarData {
                value,
                grad: 0.0,
                grad_fn,
                op,
            })),
        })
    }

    /// The forward value of this node.
    pub fn value(&self) -> f64 {
        self.borrow_data().value
    }

    /// Reassigns the node's value. This is the external mutation hook for
    /// parameter updates (`value -= lr * grad`) and for the perturbations
    /// of numeric gradient checking; operations never mutate values.
    ///
    /// # Errors
    /// Returns [`ScalarustError::NonFinite`] if `value` is NaN or infinite,
    /// leaving the stored value unchanged.
    pub fn set_value(&self, value: f64) -> Result<(), ScalarustError> {
        if !value.is_finite() {
            return Err(ScalarustError::NonFinite {
                value,
                operation: "set_value",
            });
        }
        self.borrow_data_mut().value = value;
        Ok(())
    }

    /// The accumulated gradient d(output)/d(self) after a backward pass.
    pub fn grad(&self) -> f64 {
        self.borrow_data().grad
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.borrow_data_mut().grad = grad;
    }

    /// Resets the gradient accumulator to zero.
    ///
    /// Gradients accumulate additively across backward passes; callers that
    /// want independent passes over a reused node must reset in between.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Diagnostic label of the operation that produced this node (empty for
    /// leaves).
    pub fn op(&self) -> &'static str {
        self.borrow_data().op
    }

    /// Whether this node is a leaf (wraps a raw number, has no parents).
    pub fn is_leaf(&self) -> bool {
        self.borrow_data().grad_fn.is_none()
    }

    /// Whether `self` and `other` are handles to the same graph node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    pub(crate) fn borrow_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    pub(crate) fn borrow_data_mut(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }
}

impl Clone for Scalar {
    /// Clones the handle (shallow, via `Rc`); the node itself is shared.
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.borrow_data();
        write!(f, "Scalar(value={:.4}, grad={:.4})", data.value, data.grad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScalarustError;

    #[test]
    fn test_new_finite_ok() {
        let s = Scalar::new(3.5).unwrap();
        assert_eq!(s.value(), 3.5);
        assert_eq!(s.grad(), 0.0);
        assert!(s.is_leaf());
        assert_eq!(s.op(), "");
    }

    #[test]
    fn test_new_rejects_nonfinite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Scalar::new(bad);
            match result {
                Err(ScalarustError::NonFinite { operation, .. }) => {
                    assert_eq!(operation, "new");
                }
                other => panic!("expected NonFinite, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_set_value_rejects_nonfinite_and_keeps_old() {
        let s = Scalar::new(1.0).unwrap();
        assert!(s.set_value(f64::NAN).is_err());
        assert_eq!(s.value(), 1.0);
        s.set_value(-2.0).unwrap();
        assert_eq!(s.value(), -2.0);
    }

    #[test]
    fn test_clone_shares_node() {
        let a = Scalar::new(1.0).unwrap();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        b.set_value(7.0).unwrap();
        assert_eq!(a.value(), 7.0);
        b.set_grad(2.5);
        assert_eq!(a.grad(), 2.5);
    }

    #[test]
    fn test_identity_is_per_instance_not_per_value() {
        let a = Scalar::new(1.0).unwrap();
        let b = Scalar::new(1.0).unwrap();
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_zero_grad() {
        let s = Scalar::new(1.0).unwrap();
        s.set_grad(4.0);
        s.zero_grad();
        assert_eq!(s.grad(), 0.0);
    }

    #[test]
    fn test_debug_format() {
        let s = Scalar::new(3.14159).unwrap();
        let rep = format!("{:?}", s);
        assert!(rep.contains("value=3.1416"));
        assert!(rep.contains("grad=0.0000"));
    }
}
