//! Runtime errors raised during interpretation.

use std::fmt;

/// Errors that can occur while running a program.
///
/// `Display` and `Error` are implemented by hand: thiserror's derive
/// treats any field named `source` as the error's cause, but the
/// `source` in `LengthMismatch` is a map-bind source name, not an
/// underlying error.
#[derive(Debug, Clone)]
pub enum InterpError {
    /// A declared input has no entry in the external data mapping.
    MissingInput(String),

    /// A declared output was never bound by any statement.
    MissingOutput(String),

    /// A map bind names a source that is not in the environment.
    UnresolvedSource(String),

    /// A map bind with more than one destination name.
    MalformedBind,

    /// An operation the interpreter does not execute.
    UnsupportedOperation(String),

    /// An expression referenced a name with no binding.
    UnboundVariable(String),

    /// A map source whose length differs from the first bind's source.
    LengthMismatch {
        source: String,
        expected: usize,
        actual: usize,
    },

    /// An operand of the wrong kind, such as a scalar map source.
    TypeMismatch(String),

    /// Division by zero, integer overflow, or a non-finite float result.
    Arithmetic(String),
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(name) => write!(f, "input data for `{name}` not found"),
            Self::MissingOutput(name) => write!(f, "output value `{name}` not found"),
            Self::UnresolvedSource(name) => write!(f, "source `{name}` for map not found"),
            Self::MalformedBind => write!(f, "map binds are unary"),
            Self::UnsupportedOperation(msg) => write!(f, "{msg}"),
            Self::UnboundVariable(name) => write!(f, "variable `{name}` not bound"),
            Self::LengthMismatch {
                source,
                expected,
                actual,
            } => write!(
                f,
                "source `{source}` for map has length {actual}, expected {expected}"
            ),
            Self::TypeMismatch(msg) => write!(f, "type mismatch: {msg}"),
            Self::Arithmetic(msg) => write!(f, "arithmetic error: {msg}"),
        }
    }
}

impl std::error::Error for InterpError {}

/// Result alias for interpreter operations.
pub type InterpResult<T> = Result<T, InterpError>;
