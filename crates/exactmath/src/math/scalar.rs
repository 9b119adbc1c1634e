//! Scalar helpers shared by `Rational` and callers.
//!
//! `gcd` and `lcm` are generic over `num_traits::PrimInt` so the rational
//! arithmetic can run them on widened intermediates.

use num_traits::{PrimInt, Signed};

use crate::math::{Integer, Real};

/// Absolute value.
pub fn abs(a: Real) -> Real {
    if a < 0.0 {
        return -a;
    }
    a
}

/// Sign of `a` as -1, 0 or 1. NaN maps to 1.
pub fn sign(a: Real) -> Integer {
    if a < 0.0 {
        -1
    } else if a == 0.0 {
        0
    } else {
        1
    }
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(0, b) == b` and `gcd(a, 0) == a`. The sign of the result is not
/// normalized: it follows the remainders, so `gcd(-2, 4) == -2`. Take the
/// absolute value before dividing a denominator by it.
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() {
        return b;
    }
    if b == T::zero() {
        return a;
    }
    gcd(b, a % b)
}

/// Least common multiple, `|a * b| / gcd(a, b)`.
///
/// # Panics
///
/// Panics on integer division by zero when both `a` and `b` are zero.
pub fn lcm<T: PrimInt + Signed>(a: T, b: T) -> T {
    (a * b).abs() / gcd(a, b)
}
