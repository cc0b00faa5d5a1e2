use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of syntax errors reported before fail-fast.
pub const MAX_ERRORS: usize = 20;

/// A structured MrXL syntax error.
///
/// Produced by the lexer and parser. Runtime errors are a separate
/// taxonomy owned by the interpreter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxError {
    /// Source file name.
    pub file: String,
    /// Human-readable error message.
    pub message: String,
    /// Source location.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
}

impl SyntaxError {
    /// Create a new error.
    pub fn new(
        file: impl Into<String>,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.span, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Syntax errors collected over a whole front-end run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxErrors {
    pub errors: Vec<SyntaxError>,
    pub total_errors: usize,
}

impl SyntaxErrors {
    /// Create an empty collection (no errors).
    pub fn empty() -> Self {
        Self {
            errors: Vec::new(),
            total_errors: 0,
        }
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push(&mut self, error: SyntaxError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    /// Fold another collection into this one.
    pub fn extend(&mut self, other: SyntaxErrors) {
        for error in other.errors {
            if self.errors.len() < MAX_ERRORS {
                self.errors.push(error);
            }
        }
        self.total_errors += other.total_errors;
    }
}
