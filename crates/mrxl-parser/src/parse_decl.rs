//! Top-level and declaration parsing.
//!
//! A program is `decl+ stmt+`: every input and output is declared up
//! front, then the statement pipeline follows.

use mrxl_lexer::token::TokenKind;
use mrxl_types::ast::*;

use crate::parser::Parser;

impl<'src> Parser<'src> {
    // ══════════════════════════════════════════════════════════════════════════
    // Program
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse a complete program: `decl+ stmt+`.
    pub(crate) fn parse_prog(&mut self) -> Option<Prog> {
        // A program opens with at least one declaration
        if !matches!(self.peek_kind(), TokenKind::Input | TokenKind::Output) {
            self.error_at_current(format!(
                "expected `input` or `output` declaration, got `{}`",
                self.peek_kind()
            ));
            return None;
        }

        let mut decls = Vec::new();
        while matches!(self.peek_kind(), TokenKind::Input | TokenKind::Output) {
            if self.too_many_errors() {
                break;
            }
            match self.parse_decl() {
                Some(decl) => decls.push(decl),
                None => self.synchronize(),
            }
        }

        let mut stmts = Vec::new();
        while !self.at_end() {
            if self.too_many_errors() {
                break;
            }
            match self.parse_stmt() {
                Some(stmt) => stmts.push(stmt),
                None => self.synchronize(),
            }
        }

        if stmts.is_empty() {
            if !self.has_errors() {
                self.error_at_current("expected at least one statement");
            }
            return None;
        }

        Some(Prog { decls, stmts })
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Declarations
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse `("input" | "output") IDENT ":" type`.
    fn parse_decl(&mut self) -> Option<Decl> {
        let input = self.eat(&TokenKind::Input);
        if !input {
            self.expect(&TokenKind::Output)?;
        }
        let name = self.expect_ident()?;
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Some(Decl { input, name, ty })
    }

    /// Parse `("int" | "float") [ "[" INT "]" ]`.
    fn parse_type(&mut self) -> Option<Type> {
        let base = match self.peek_kind() {
            TokenKind::KwInt => BaseType::Int,
            TokenKind::KwFloat => BaseType::Float,
            other => {
                self.error_at_current(format!("expected `int` or `float`, got `{other}`"));
                return None;
            }
        };
        self.advance();

        let size = if self.eat(&TokenKind::LBracket) {
            let size = self.expect_array_size()?;
            self.expect(&TokenKind::RBracket)?;
            Some(size)
        } else {
            None
        };

        Some(Type { base, size })
    }

    /// Expect an integer literal giving an array size.
    fn expect_array_size(&mut self) -> Option<u64> {
        match self.peek_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Some(n as u64)
            }
            _ => {
                self.error_at_current(format!(
                    "expected array size, got `{}`",
                    self.peek_kind()
                ));
                None
            }
        }
    }
}
