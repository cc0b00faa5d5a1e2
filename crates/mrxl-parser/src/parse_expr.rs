//! Expression parsing with operator precedence.
//!
//! Precedence (lowest to highest):
//! 1. `+`, `-`
//! 2. `*`, `/`
//!
//! Parentheses group; there is no unary minus in MrXL.

use mrxl_lexer::token::TokenKind;
use mrxl_types::ast::*;
use mrxl_types::Number;

use crate::parser::Parser;

impl<'src> Parser<'src> {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_add()
    }

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> Option<Expr> {
        let mut left = self.parse_mul()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_mul()?;
            left = Expr::Bin {
                op,
                lhs: Box::new(left),
                rhs: Box::new(right),
            };
        }
        Some(left)
    }

    /// `MulExpr = Factor { ("*" | "/") Factor }`
    fn parse_mul(&mut self) -> Option<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::Bin {
                op,
                lhs: Box::new(left),
                rhs: Box::new(right),
            };
        }
        Some(left)
    }

    /// `Factor = INT | FLOAT | IDENT | "(" expr ")"`
    fn parse_factor(&mut self) -> Option<Expr> {
        match self.peek_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Some(Expr::Lit(Number::Int(n)))
            }
            TokenKind::Float(x) => {
                self.advance();
                Some(Expr::Lit(Number::Float(x)))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Some(Expr::Var(name))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Some(inner)
            }
            other => {
                self.error_at_current(format!("expected expression, got `{other}`"));
                None
            }
        }
    }
}
