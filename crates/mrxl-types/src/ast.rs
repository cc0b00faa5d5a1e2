//! AST node types for the MrXL language.
//!
//! Nodes mirror the surface grammar directly and carry no spans: syntax
//! errors are reported by the front end against token locations, and
//! runtime errors are keyed by name, not by position.

use crate::Number;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete MrXL program: declarations followed by statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Prog {
    pub decls: Vec<Decl>,
    pub stmts: Vec<Stmt>,
}

// ══════════════════════════════════════════════════════════════════════════════
// Declarations
// ══════════════════════════════════════════════════════════════════════════════

/// `input avec: int[1024]` or `output sum: int`
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    /// `true` for `input`, `false` for `output`.
    pub input: bool,
    pub name: String,
    pub ty: Type,
}

/// A type annotation: a scalar `int` / `float`, or a sized array
/// `int[1024]`. Annotations are surface syntax only; evaluation never
/// consults them.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub base: BaseType,
    /// `Some(n)` for an array type of length `n`, `None` for a scalar.
    pub size: Option<u64>,
}

/// The element type of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// `int`
    Int,
    /// `float`
    Float,
}

impl BaseType {
    /// Returns the type keyword for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Int => "int",
            BaseType::Float => "float",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// `dest := map … { … }` or `dest := reduce … { … }`
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub dest: String,
    pub op: Op,
}

/// The operator side of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Map(MapOp),
    Reduce(ReduceOp),
}

/// `map 16 (a <- avec) (b <- bvec) { a + b }`
#[derive(Debug, Clone, PartialEq)]
pub struct MapOp {
    /// Parallelism factor. A hardware hint; evaluation ignores it.
    pub par: u32,
    pub bind: Vec<Bind>,
    pub body: Expr,
}

/// `reduce 4 (acc, x <- avec) 0 { acc + x }`
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceOp {
    /// Parallelism factor. A hardware hint; evaluation ignores it.
    pub par: u32,
    pub bind: Vec<Bind>,
    pub init: Expr,
    pub body: Expr,
}

/// A binding clause: `(x <- xs)` or `(acc, x <- xs)`.
///
/// The grammar allows one or two destination names so that reduce can
/// name its accumulator; map requires exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind {
    pub dest: Vec<String>,
    pub src: String,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression in an operator body. Uses `Box` for recursive variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `42`, `3.14`
    Lit(Number),
    /// `x`
    Var(String),
    /// `a + b`
    Bin {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}
