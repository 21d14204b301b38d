//! Operator sugar over the fallible op functions.
//!
//! The `std::ops` traits cannot return `Result`, so these impls panic on a
//! domain error (non-finite result, undefined power). They are meant for
//! tests and quick experiments; code that wants to handle errors uses the
//! `*_op` functions or the fallible `Scalar` methods directly.
//!
//! Raw `f64` operands are promoted to leaf nodes explicitly via
//! [`Scalar::new`]; a non-finite literal panics the same way a non-finite
//! result does.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn promote(value: f64) -> Scalar {
    Scalar::new(value).unwrap_or_else(|e| panic!("scalar promotion failed: {}", e))
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        add_op(self, other).unwrap_or_else(|e| panic!("scalar addition failed: {}", e))
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        &self + &other
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        &self + other
    }
}

impl Add<Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        self + &other
    }
}

impl Add<f64> for &Scalar {
    type Output = Scalar;

    fn add(self, other: f64) -> Scalar {
        self + &promote(other)
    }
}

impl Add<f64> for Scalar {
    type Output = Scalar;

    fn add(self, other: f64) -> Scalar {
        &self + &promote(other)
    }
}

impl Add<&Scalar> for f64 {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        &promote(self) + other
    }
}

impl Add<Scalar> for f64 {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        &promote(self) + &other
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        sub_op(self, other).unwrap_or_else(|e| panic!("scalar subtraction failed: {}", e))
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        &self - &other
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        &self - other
    }
}

impl Sub<Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        self - &other
    }
}

impl Sub<f64> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: f64) -> Scalar {
        self - &promote(other)
    }
}

impl Sub<f64> for Scalar {
    type Output = Scalar;

    fn sub(self, other: f64) -> Scalar {
        &self - &promote(other)
    }
}

impl Sub<&Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        &promote(self) - other
    }
}

impl Sub<Scalar> for f64 {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        &promote(self) - &other
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        mul_op(self, other).unwrap_or_else(|e| panic!("scalar multiplication failed: {}", e))
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        &self * &other
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        &self * other
    }
}

impl Mul<Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        self * &other
    }
}

impl Mul<f64> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: f64) -> Scalar {
        self * &promote(other)
    }
}

impl Mul<f64> for Scalar {
    type Output = Scalar;

    fn mul(self, other: f64) -> Scalar {
        &self * &promote(other)
    }
}

impl Mul<&Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        &promote(self) * other
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        &promote(self) * &other
    }
}

impl Div<&Scalar> for &Scalar {
    type Output = Scalar;

    fn div(self, other: &Scalar) -> Scalar {
        div_op(self, other).unwrap_or_else(|e| panic!("scalar division failed: {}", e))
    }
}

impl Div<Scalar> for Scalar {
    type Output = Scalar;

    fn div(self, other: Scalar) -> Scalar {
        &self / &other
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Scalar;

    fn div(self, other: &Scalar) -> Scalar {
        &self / other
    }
}

impl Div<Scalar> for &Scalar {
    type Output = Scalar;

    fn div(self, other: Scalar) -> Scalar {
        self / &other
    }
}

impl Div<f64> for &Scalar {
    type Output = Scalar;

    fn div(self, other: f64) -> Scalar {
        self / &promote(other)
    }
}

impl Div<f64> for Scalar {
    type Output = Scalar;

    fn div(self, other: f64) -> Scalar {
        &self / &promote(other)
    }
}

impl Div<&Scalar> for f64 {
    type Output = Scalar;

    fn div(self, other: &Scalar) -> Scalar {
        &promote(self) / other
    }
}

impl Div<Scalar> for f64 {
    type Output = Scalar;

    fn div(self, other: Scalar) -> Scalar {
        &promote(self) / &other
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self).unwrap_or_else(|e| panic!("scalar negation failed: {}", e))
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}
