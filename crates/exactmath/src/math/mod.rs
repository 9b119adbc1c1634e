//! Numeric types used throughout the crate.
//!
//! Provides the semantic scalar aliases, the scalar helpers in `scalar`,
//! `Rational` (a reduced fixed-width fraction) and `Matrix` (a row-major
//! 2D grid of reals).
pub mod matrix;
pub mod rational;
pub mod scalar;

/// Signed machine integer, the numerator type of a `Rational`.
pub type Integer = i32;
/// Unsigned machine integer, the denominator type of a `Rational`.
pub type Natural = u32;
/// Floating-point real.
pub type Real = f64;

pub use matrix::{Dimension, Matrix, ShapeError};
pub use rational::Rational;
