use crate::error::ScalarustError;
use crate::scalar::Scalar;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarustError),

    #[error("numeric gradient estimate is not finite (f(x+eps) = {loss_plus}, f(x-eps) = {loss_minus})")]
    NonFiniteEstimate { loss_plus: f64, loss_minus: f64 },

    #[error("gradient check failed: analytical grad {analytical} != numerical grad {numerical} (difference {difference})")]
    GradientMismatch {
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
}

/// Estimates d(expr)/d(param) by central finite differences.
///
/// `expr_fn` must rebuild the forward expression from scratch on every call
/// (node values are immutable once an operation has consumed them, so a
/// graph built before the perturbation would still carry the old value).
/// The perturbed leaf's original value is restored unconditionally,
/// including when a forward pass fails.
pub fn numeric_grad<F>(param: &Scalar, expr_fn: F, epsilon: f64) -> Result<f64, GradCheckError>
where
    F: Fn() -> Result<Scalar, ScalarustError>,
{
    let original = param.value();

    let estimate = (|| {
        param.set_value(original + epsilon)?;
        let loss_plus = expr_fn()?.value();

        param.set_value(original - epsilon)?;
        let loss_minus = expr_fn()?.value();

        Ok::<(f64, f64), ScalarustError>((loss_plus, loss_minus))
    })();

    // Restore before inspecting the result, so failure paths do not leave
    // the parameter perturbed. The original value was accepted once, so
    // re-setting it cannot fail.
    param
        .set_value(original)
        .expect("restoring a previously validated value cannot fail");

    let (loss_plus, loss_minus) = estimate?;
    let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
    if !numerical.is_finite() {
        return Err(GradCheckError::NonFiniteEstimate {
            loss_plus,
            loss_minus,
        });
    }
    Ok(numerical)
}

/// Checks the analytical gradient of `param` against the central-difference
/// estimate.
///
/// Runs a fresh forward build and backward pass (zeroing `param`'s
/// accumulator first), then compares against [`numeric_grad`]. The check
/// passes when either the absolute or the relative difference is within
/// `tolerance`.
pub fn check_grad<F>(
    param: &Scalar,
    expr_fn: F,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn() -> Result<Scalar, ScalarustError>,
{
    param.zero_grad();
    let output = expr_fn()?;
    output.backward();
    let analytical = param.grad();

    let numerical = numeric_grad(param, &expr_fn, epsilon)?;

    let difference = (analytical - numerical).abs();
    let relative = difference / (analytical.abs() + epsilon);
    if difference > tolerance && relative > tolerance {
        return Err(GradCheckError::GradientMismatch {
            analytical,
            numerical,
            difference,
        });
    }
    Ok(())
}
