//! MrXL tree-walking interpreter.
//!
//! Walks a parsed program: loads declared inputs from the external
//! data mapping, executes map statements over array data, and extracts
//! the declared outputs. Reduce statements parse but are rejected at
//! execution time.

pub mod env;
pub mod error;
pub mod interp;
pub mod value;

pub use env::Environment;
pub use error::{InterpError, InterpResult};
pub use interp::{eval_expr, interp, Interpreter};
pub use value::{DataMap, Value};
