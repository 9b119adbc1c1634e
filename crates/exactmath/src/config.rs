use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How inverting a zero-valued rational is handled.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisionPolicy {
    /// Log the condition and replace the value with `Rational::INFINITY`.
    #[default]
    Saturate,
    /// Leave the value untouched and return `MathError::DivisionByZero`.
    Reject,
}

impl FromStr for ZeroDivisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saturate" | "sentinel" => Ok(ZeroDivisionPolicy::Saturate),
            "reject" | "error" => Ok(ZeroDivisionPolicy::Reject),
            _ => Err(format!(
                "Unknown zero-division policy: {}. Expected one of `saturate` or `reject`",
                s
            )),
        }
    }
}
