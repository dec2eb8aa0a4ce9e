//! Expression parsing.
//!
//! Precedence, loosest first: `||`, `&&`, comparisons (non-associative),
//! `+`/`-`, then prefix `!`/`-`. Binary operators are left-associative.

use num_bigint::BigInt;
use numscript_ir::{BinaryOp, Expr, ExprKind, Range, Token, TokenKind, UnaryOp};
use tracing::trace;

use super::stmt::string_body;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| p.parse_binary(1))
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = binary_op(self.cursor.current_kind()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(prec + 1)?;
            let range = left.range.cover(right.range);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                range,
            );

            if op.is_comparison()
                && binary_op(self.cursor.current_kind()).is_some_and(BinaryOp::is_comparison)
            {
                return Err(ParseError::new(
                    self.cursor.current_range(),
                    "comparison operators cannot be chained",
                ));
            }
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_primary(),
        };
        let start = self.cursor.advance().range.start;
        let operand = self.nested(Self::parse_unary)?;
        let range = Range::new(start, operand.range.end);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            range,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let text = self.cursor.slice(token);
        trace!(kind = ?token.kind, "parse_primary");

        let kind = match token.kind {
            TokenKind::LBracket => return self.parse_monetary(),
            TokenKind::Number => return self.parse_number_or_portion(),
            TokenKind::Balance => {
                return self.parse_query(|account, asset| ExprKind::Balance { account, asset });
            }
            TokenKind::Meta => {
                return self.parse_query(|account, key| ExprKind::Meta { account, key });
            }
            TokenKind::LParen => return self.parse_parenthesized(),

            TokenKind::Account => {
                ExprKind::Account(text.strip_prefix('@').unwrap_or(text).to_string())
            }
            TokenKind::Variable => {
                ExprKind::Variable(text.strip_prefix('$').unwrap_or(text).to_string())
            }
            TokenKind::Asset => ExprKind::Asset(text.to_string()),
            TokenKind::String => ExprKind::String(string_body(text)),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Percent => {
                let (numerator, denominator) = numscript_lexer::parse_percent(text)
                    .ok_or_else(|| {
                        ParseError::new(token.range, format!("invalid percentage `{text}`"))
                    })?;
                ExprKind::Portion {
                    numerator,
                    denominator,
                }
            }
            _ => return Err(self.cursor.make_expect_error("expression")),
        };

        self.cursor.advance();
        Ok(Expr::new(kind, token.range))
    }

    /// `[ASSET NUMBER]`
    fn parse_monetary(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().range.start;
        let asset_token = self.cursor.expect(TokenKind::Asset)?;
        let asset = self.cursor.slice(asset_token).to_string();
        let amount_token = self.cursor.expect(TokenKind::Number)?;
        let amount = self.integer(amount_token)?;
        self.cursor.expect(TokenKind::RBracket)?;
        Ok(Expr::new(
            ExprKind::Monetary { asset, amount },
            self.cursor.range_from(start),
        ))
    }

    /// `NUMBER` or the portion `NUMBER/NUMBER`.
    fn parse_number_or_portion(&mut self) -> Result<Expr, ParseError> {
        let first = self.cursor.advance();
        let numerator = self.integer(first)?;
        if !self.cursor.eat(TokenKind::Slash) {
            return Ok(Expr::new(ExprKind::Number(numerator), first.range));
        }

        let second = self.cursor.expect(TokenKind::Number)?;
        let denominator = self.integer(second)?;
        Ok(Expr::new(
            ExprKind::Portion {
                numerator,
                denominator,
            },
            first.range.cover(second.range),
        ))
    }

    /// `balance(a, b)` and `meta(a, b)`.
    fn parse_query(
        &mut self,
        build: fn(Box<Expr>, Box<Expr>) -> ExprKind,
    ) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().range.start;
        self.cursor.expect(TokenKind::LParen)?;
        let first = self.parse_expr()?;
        self.cursor.expect(TokenKind::Comma)?;
        let second = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(Expr::new(
            build(Box::new(first), Box::new(second)),
            self.cursor.range_from(start),
        ))
    }

    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().range.start;
        let inner = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(Expr::new(inner.kind, self.cursor.range_from(start)))
    }

    fn integer(&self, token: &Token) -> Result<BigInt, ParseError> {
        let text = self.cursor.slice(token);
        numscript_lexer::parse_integer(text)
            .ok_or_else(|| ParseError::new(token.range, format!("invalid number `{text}`")))
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::PipePipe => BinaryOp::Or,
        TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        _ => return None,
    })
}
