use scalarust_core::autograd::grad_check::{check_grad, numeric_grad};
use scalarust_core::ops::arithmetic::{add_op, div_op, mul_op, pow_op, sub_op};
use scalarust_core::Scalar;

const EPSILON: f64 = 1e-4;
const TOLERANCE: f64 = 1e-3;

// Autodiff gradients agree with central differences for every supported
// operation, evaluated away from domain boundaries.
#[test]
fn test_arithmetic_ops_match_numeric() {
    let x = Scalar::new(0.7).unwrap();
    let y = Scalar::new(-1.3).unwrap();

    check_grad(&x, || add_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&y, || add_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&x, || sub_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&y, || sub_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&x, || mul_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&y, || mul_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&x, || div_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&y, || div_op(&x, &y), EPSILON, TOLERANCE).unwrap();
    check_grad(&x, || pow_op(&x, 3.0), EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_activations_match_numeric() {
    for v in [-2.0, 0.3, 4.0] {
        let x = Scalar::new(v).unwrap();
        check_grad(&x, || x.tanh(), EPSILON, TOLERANCE).unwrap();
    }
    // ReLU away from the kink, where the finite difference is valid.
    for v in [-2.0, 1.5] {
        let x = Scalar::new(v).unwrap();
        check_grad(&x, || x.relu(), EPSILON, TOLERANCE).unwrap();
    }
}

#[test]
fn test_composite_expression_matches_numeric() {
    // g(x, y) = tanh(x*y) + (x - y)^2 / y
    let x = Scalar::new(0.5).unwrap();
    let y = Scalar::new(-1.2).unwrap();

    let expr = || {
        let prod_act = mul_op(&x, &y)?.tanh()?;
        let diff_sq = sub_op(&x, &y)?.powf(2.0)?;
        add_op(&prod_act, &div_op(&diff_sq, &y)?)
    };

    check_grad(&x, expr, EPSILON, TOLERANCE).unwrap();
    check_grad(&y, expr, EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_numeric_grad_restores_value() {
    let x = Scalar::new(0.5).unwrap();
    let y = Scalar::new(-1.2).unwrap();
    let grad = numeric_grad(&x, || mul_op(&x, &y)?.tanh(), EPSILON).unwrap();
    assert!(grad.is_finite());
    assert_eq!(x.value(), 0.5);
    assert_eq!(y.value(), -1.2);
}
