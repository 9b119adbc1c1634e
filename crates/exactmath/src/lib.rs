//! exactmath: exact rational arithmetic and a small dense matrix type.
//!
//! This crate provides a fixed-width `Rational` that keeps itself in lowest
//! terms, a row-major `Matrix` of reals with transpose and bounds-checked
//! access, and the scalar helpers (abs, sign, gcd, lcm) both are built on.
//!
//! Division by zero never aborts: the operator path logs through the `log`
//! facade and degrades to `Rational::INFINITY`, while the `try_*`/`checked_*`
//! methods surface it as a `MathError`.
pub mod config;
pub mod error;
pub mod math;

pub use config::ZeroDivisionPolicy;
pub use error::MathError;
pub use math::{Dimension, Integer, Matrix, Natural, Rational, Real, ShapeError};
