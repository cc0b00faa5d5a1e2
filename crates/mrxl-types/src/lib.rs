//! Shared types for the MrXL interpreter.
//!
//! This crate defines the AST node types, the scalar `Number` union,
//! source spans, and the syntax error types used by the front end.

mod error;
mod number;
mod span;
pub mod ast;

pub use error::{SyntaxError, SyntaxErrors, MAX_ERRORS};
pub use number::Number;
pub use span::{SourceFile, Span};
