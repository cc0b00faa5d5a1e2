//! Core MrXL lexer: converts source text to a token stream.
//!
//! Features:
//! - Keywords, identifiers, integer and float literals, operators
//! - Single-line comments stripped (`//`)
//! - Whitespace-insensitive: newlines are trivia, not separators
//! - Error recovery: collects up to 20 errors instead of stopping at the first

use mrxl_types::{SourceFile, Span, SyntaxError, SyntaxErrors, MAX_ERRORS};

use crate::token::{Token, TokenKind};

/// The MrXL lexer.
///
/// Converts source text into a vector of [`Token`]s, collecting up to
/// [`mrxl_types::MAX_ERRORS`] errors along the way.
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Source file for error reporting.
    source_file: &'src SourceFile,
    /// File name (for errors).
    file_name: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
    /// Collected errors.
    errors: SyntaxErrors,
}

/// Result of lexing: tokens + any errors collected.
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: SyntaxErrors,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            source: source_file.source.as_bytes(),
            source_file,
            file_name: &source_file.name,
            pos: 0,
            line: 1,
            col: 1,
            errors: SyntaxErrors::empty(),
        }
    }

    /// Lex the entire source file into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_from(&self, start_line: u32, start_col: u32, start_pos: usize) -> Span {
        Span::new(start_line, start_col, (self.pos - start_pos) as u32)
    }

    fn emit_error(&mut self, message: impl Into<String>, span: Span) {
        let source_line = self.source_file.line(span.line).unwrap_or("").to_string();
        let err = SyntaxError::new(self.file_name, message, span, source_line);
        self.errors.push(err);
    }

    // ─────────────────────────────────────────────────────────────
    // Trivia
    // ─────────────────────────────────────────────────────────────

    /// Skip whitespace (newlines included) and `//` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {
                    self.advance();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    // Consume everything until end-of-line
                    while let Some(ch) = self.peek() {
                        if ch == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Token scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token, skipping leading trivia and recovering from
    /// unexpected characters.
    fn next_token(&mut self) -> Token {
        loop {
            self.skip_trivia();

            // Stop scanning once the error cap is reached
            if self.errors.total_errors >= MAX_ERRORS {
                return Token::new(TokenKind::Eof, Span::point(self.line, self.col));
            }

            if self.at_end() {
                return Token::new(TokenKind::Eof, Span::point(self.line, self.col));
            }

            let start_line = self.line;
            let start_col = self.col;
            let start_pos = self.pos;
            let ch = match self.advance() {
                Some(ch) => ch,
                None => return Token::new(TokenKind::Eof, Span::point(self.line, self.col)),
            };

            let span = |lexer: &Self| lexer.span_from(start_line, start_col, start_pos);

            match ch {
                // ── Literals ──
                b'0'..=b'9' => return self.scan_number(start_line, start_col, start_pos),

                // ── Identifiers & keywords ──
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                    return self.scan_ident(start_line, start_col, start_pos)
                }

                // ── Operators & punctuation ──
                b'+' => return Token::new(TokenKind::Plus, span(self)),
                b'-' => return Token::new(TokenKind::Minus, span(self)),
                b'*' => return Token::new(TokenKind::Star, span(self)),
                // `//` comments were consumed as trivia, so a bare `/` is division
                b'/' => return Token::new(TokenKind::Slash, span(self)),

                b':' => {
                    if self.peek() == Some(b'=') {
                        self.advance();
                        return Token::new(TokenKind::ColonEq, span(self));
                    }
                    return Token::new(TokenKind::Colon, span(self));
                }

                b'<' => {
                    if self.peek() == Some(b'-') {
                        self.advance();
                        return Token::new(TokenKind::LArrow, span(self));
                    }
                    let sp = span(self);
                    self.emit_error("unexpected character `<` (did you mean `<-`?)", sp);
                    // Error recovery: skip the character and rescan
                }

                b',' => return Token::new(TokenKind::Comma, span(self)),
                b'(' => return Token::new(TokenKind::LParen, span(self)),
                b')' => return Token::new(TokenKind::RParen, span(self)),
                b'[' => return Token::new(TokenKind::LBracket, span(self)),
                b']' => return Token::new(TokenKind::RBracket, span(self)),
                b'{' => return Token::new(TokenKind::LBrace, span(self)),
                b'}' => return Token::new(TokenKind::RBrace, span(self)),

                _ => {
                    let sp = span(self);
                    self.emit_error(format!("unexpected character `{}`", ch as char), sp);
                    // Error recovery: skip the character and rescan
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self, start_line: u32, start_col: u32, start_pos: usize) -> Token {
        // First digit already consumed
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        // A decimal point makes it a float, but only with digits after it
        let is_float = self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9'));
        if is_float {
            self.advance(); // consume '.'
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        let span = self.span_from(start_line, start_col, start_pos);
        let text = std::str::from_utf8(&self.source[start_pos..self.pos]).unwrap_or("0");

        if is_float {
            let value: f64 = text.parse().unwrap_or(0.0);
            return Token::new(TokenKind::Float(value), span);
        }

        match text.parse::<i64>() {
            Ok(value) => Token::new(TokenKind::Int(value), span),
            Err(_) => {
                self.emit_error(format!("integer literal `{text}` out of range"), span);
                Token::new(TokenKind::Int(0), span)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers & keywords
    // ─────────────────────────────────────────────────────────────

    fn scan_ident(&mut self, start_line: u32, start_col: u32, start_pos: usize) -> Token {
        // First character was already consumed (letter or `_`)
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }

        let span = self.span_from(start_line, start_col, start_pos);
        let text = std::str::from_utf8(&self.source[start_pos..self.pos]).unwrap_or("");

        let kind =
            TokenKind::from_keyword(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()));

        Token::new(kind, span)
    }
}
