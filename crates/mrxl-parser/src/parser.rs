//! Core parser infrastructure: token cursor, error reporting, recovery.

use mrxl_lexer::token::{Token, TokenKind};
use mrxl_types::{SourceFile, Span, SyntaxError, SyntaxErrors};

/// The MrXL parser.
///
/// Consumes a token stream produced by the lexer and builds an AST.
/// Collects errors and attempts recovery when possible.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Source file for error context.
    source_file: &'src SourceFile,
    /// File name for error messages.
    file_name: String,
    /// Collected errors.
    errors: SyntaxErrors,
}

/// Result of parsing.
pub struct ParseResult {
    pub program: Option<mrxl_types::ast::Prog>,
    pub errors: SyntaxErrors,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source file.
    pub fn new(tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            file_name: source_file.name.clone(),
            source_file,
            errors: SyntaxErrors::empty(),
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should end with Eof")
        })
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Look ahead by `n` tokens from current position.
    pub(crate) fn look_ahead(&self, n: usize) -> &TokenKind {
        self.tokens.get(self.pos + n).map(|t| &t.kind).unwrap_or_else(|| {
            &self
                .tokens
                .last()
                .expect("token stream should end with Eof")
                .kind
        })
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a specific token kind. Returns the token if matched, or emits an error.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Option<Token> {
        if self.check_exact(expected) {
            Some(self.advance())
        } else {
            self.error_at_current(format!(
                "expected `{}`, got `{}`",
                expected,
                self.peek_kind()
            ));
            None
        }
    }

    /// Expect an identifier token. Returns the name.
    pub(crate) fn expect_ident(&mut self) -> Option<String> {
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Some(name)
            }
            _ => {
                self.error_at_current(format!(
                    "expected identifier, got `{}`",
                    self.peek_kind()
                ));
                None
            }
        }
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Report an error at the current token position.
    pub(crate) fn error_at_current(&mut self, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(message, span);
    }

    /// Report an error at a specific span.
    pub(crate) fn error_at(&mut self, message: impl Into<String>, span: Span) {
        let source_line = self.source_file.line(span.line).unwrap_or("").to_string();
        let error = SyntaxError::new(&self.file_name, message, span, source_line);
        self.errors.push(error);
    }

    /// Returns `true` if any syntax errors have been collected.
    pub(crate) fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Returns `true` if we've hit the error limit and should stop.
    pub(crate) fn too_many_errors(&self) -> bool {
        self.errors.total_errors >= mrxl_types::MAX_ERRORS
    }

    // ── Synchronization ───────────────────────────────────────────────────────

    /// Skip tokens until we reach a synchronization point: a declaration
    /// keyword or the `IDENT :=` head of a statement.
    ///
    /// Always consumes at least one token so recovery cannot loop.
    pub(crate) fn synchronize(&mut self) {
        if !self.at_end() {
            self.advance();
        }
        while !self.at_end() {
            match self.peek_kind() {
                TokenKind::Input | TokenKind::Output => return,
                TokenKind::Ident(_) if self.look_ahead(1) == &TokenKind::ColonEq => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a `Prog` AST.
    pub fn parse(mut self) -> ParseResult {
        let program = self.parse_prog();
        ParseResult {
            program,
            errors: self.errors,
        }
    }
}
