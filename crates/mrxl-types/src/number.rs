use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar MrXL value: an integer or a float.
///
/// Arithmetic keeps integers exact (`2 + 3` is `5`) and promotes to float
/// as soon as either operand is a float; division always produces a float
/// (`6 / 3` is `2.0`).
///
/// The untagged representation lets external data read and write as plain
/// JSON numbers. `Int` is tried first, so `2` stays an integer and `2.5`
/// becomes a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// `42`
    Int(i64),
    /// `3.14`
    Float(f64),
}

impl Number {
    /// Whether this number is zero, of either kind.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => *n == 0,
            Number::Float(x) => *x == 0.0,
        }
    }

    /// The value as a float, widening an integer if needed.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(x) => *x,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // Debug formatting keeps the trailing ".0" on whole floats.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}
