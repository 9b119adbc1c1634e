use std::error::Error;
use std::fmt;

/// Error type for rational arithmetic failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    DivisionByZero,
    ZeroDenominator,
    Overflow,
    Parse(String), // The offending input
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "Division by zero"),
            MathError::ZeroDenominator => write!(f, "Denominator must be non-zero"),
            MathError::Overflow => write!(f, "Result does not fit in a fixed-width rational"),
            MathError::Parse(input) => write!(f, "Cannot parse '{}' as a rational, expected N/D", input),
        }
    }
}

impl Error for MathError {}
