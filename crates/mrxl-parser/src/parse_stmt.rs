//! Statement parsing: `dest := map …` and `dest := reduce …`.

use mrxl_lexer::token::TokenKind;
use mrxl_types::ast::*;
use mrxl_types::Number;

use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// Parse `IDENT ":=" op`.
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        let dest = self.expect_ident()?;
        self.expect(&TokenKind::ColonEq)?;
        let op = self.parse_op()?;
        Some(Stmt { dest, op })
    }

    /// Parse a map or reduce operator.
    fn parse_op(&mut self) -> Option<Op> {
        match self.peek_kind() {
            TokenKind::Map => {
                self.advance();
                let par = self.expect_par()?;
                let bind = self.parse_binds()?;
                let body = self.parse_braced_expr()?;
                Some(Op::Map(MapOp { par, bind, body }))
            }
            TokenKind::Reduce => {
                self.advance();
                let par = self.expect_par()?;
                let bind = self.parse_binds()?;
                let init = self.parse_init_literal()?;
                let body = self.parse_braced_expr()?;
                Some(Op::Reduce(ReduceOp {
                    par,
                    bind,
                    init,
                    body,
                }))
            }
            other => {
                self.error_at_current(format!("expected `map` or `reduce`, got `{other}`"));
                None
            }
        }
    }

    /// Expect a positive integer parallelism factor.
    fn expect_par(&mut self) -> Option<u32> {
        match self.peek_kind().clone() {
            TokenKind::Int(n) if n > 0 && n <= u32::MAX as i64 => {
                self.advance();
                Some(n as u32)
            }
            _ => {
                self.error_at_current(format!(
                    "expected parallelism factor, got `{}`",
                    self.peek_kind()
                ));
                None
            }
        }
    }

    /// Parse one or more bind clauses: `"(" … ")"` repeated.
    fn parse_binds(&mut self) -> Option<Vec<Bind>> {
        let mut binds = Vec::new();
        while self.check_exact(&TokenKind::LParen) {
            binds.push(self.parse_bind()?);
        }
        if binds.is_empty() {
            self.error_at_current(format!(
                "expected bind clause `(x <- xs)`, got `{}`",
                self.peek_kind()
            ));
            return None;
        }
        Some(binds)
    }

    /// Parse `"(" IDENT ["," IDENT] "<-" IDENT ")"`.
    ///
    /// Two destination names are the reduce accumulator form; the
    /// interpreter rejects them in a map.
    fn parse_bind(&mut self) -> Option<Bind> {
        self.expect(&TokenKind::LParen)?;
        let mut dest = vec![self.expect_ident()?];
        if self.eat(&TokenKind::Comma) {
            dest.push(self.expect_ident()?);
        }
        self.expect(&TokenKind::LArrow)?;
        let src = self.expect_ident()?;
        self.expect(&TokenKind::RParen)?;
        Some(Bind { dest, src })
    }

    /// Parse the literal initialiser of a reduce.
    fn parse_init_literal(&mut self) -> Option<Expr> {
        match self.peek_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Some(Expr::Lit(Number::Int(n)))
            }
            TokenKind::Float(x) => {
                self.advance();
                Some(Expr::Lit(Number::Float(x)))
            }
            other => {
                self.error_at_current(format!("expected initial value literal, got `{other}`"));
                None
            }
        }
    }

    /// Parse `"{" expr "}"`.
    fn parse_braced_expr(&mut self) -> Option<Expr> {
        self.expect(&TokenKind::LBrace)?;
        let body = self.parse_expression()?;
        self.expect(&TokenKind::RBrace)?;
        Some(body)
    }
}
