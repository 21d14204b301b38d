use crate::error::ScalarustNnError;
use scalarust_core::ops::arithmetic::{add_op, div_op, sub_op};
use scalarust_core::Scalar;

/// Mean squared error between predictions and raw targets, as a
/// differentiable node: `mean((pred_i - target_i)^2)`.
pub fn mse_loss(predictions: &[Scalar], targets: &[f64]) -> Result<Scalar, ScalarustNnError> {
    if predictions.len() != targets.len() || predictions.is_empty() {
        return Err(ScalarustNnError::ShapeMismatch {
            expected: predictions.len().max(1),
            actual: targets.len(),
        });
    }

    let mut sum = Scalar::new(0.0)?;
    for (pred, &target) in predictions.iter().zip(targets) {
        let diff = sub_op(pred, &Scalar::new(target)?)?;
        sum = add_op(&sum, &diff.powf(2.0)?)?;
    }
    let count = Scalar::new(predictions.len() as f64)?;
    Ok(div_op(&sum, &count)?)
}
