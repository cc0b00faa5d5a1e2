//! Token types for the MrXL lexer.
//!
//! Defines [`TokenKind`] covering every lexeme in MrXL and [`Token`],
//! which pairs a kind with a source [`Span`].

use mrxl_types::Span;
use std::fmt;

/// All reserved identifiers in MrXL.
///
/// These cannot be used as user-defined names. The lexer recognises each
/// one and emits a specific keyword token instead of [`TokenKind::Ident`].
pub const ALL_KEYWORDS: &[&str] = &["input", "output", "map", "reduce", "int", "float"];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the MrXL lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns `true` if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in the MrXL language.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────

    /// Integer literal: `42`
    Int(i64),
    /// Float literal: `3.14`
    Float(f64),

    // ── Identifiers ──────────────────────────────────────────

    /// User-defined identifier: `avec`, `sum_1`
    Ident(String),

    // ── Keywords ─────────────────────────────────────────────

    /// `input`
    Input,
    /// `output`
    Output,
    /// `map`
    Map,
    /// `reduce`
    Reduce,
    /// `int` (element type)
    KwInt,
    /// `float` (element type)
    KwFloat,

    // ── Operators ────────────────────────────────────────────

    /// `:=`
    ColonEq,
    /// `<-`
    LArrow,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // ── Punctuation ──────────────────────────────────────────

    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ── Special ──────────────────────────────────────────────

    /// End of file
    Eof,
}

impl TokenKind {
    /// Look up a reserved identifier. Returns `Some(kind)` for the
    /// reserved words, `None` for user identifiers.
    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        Some(match s {
            "input" => TokenKind::Input,
            "output" => TokenKind::Output,
            "map" => TokenKind::Map,
            "reduce" => TokenKind::Reduce,
            "int" => TokenKind::KwInt,
            "float" => TokenKind::KwFloat,
            _ => return None,
        })
    }

    /// Returns `true` if this token kind is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Input
                | TokenKind::Output
                | TokenKind::Map
                | TokenKind::Reduce
                | TokenKind::KwInt
                | TokenKind::KwFloat
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Literals
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::Float(x) => write!(f, "{x:?}"),
            // Identifiers
            TokenKind::Ident(s) => f.write_str(s),
            // Keywords display their source text
            TokenKind::Input => f.write_str("input"),
            TokenKind::Output => f.write_str("output"),
            TokenKind::Map => f.write_str("map"),
            TokenKind::Reduce => f.write_str("reduce"),
            TokenKind::KwInt => f.write_str("int"),
            TokenKind::KwFloat => f.write_str("float"),
            // Operators
            TokenKind::ColonEq => f.write_str(":="),
            TokenKind::LArrow => f.write_str("<-"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            // Punctuation
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            // Special
            TokenKind::Eof => f.write_str("end of file"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
