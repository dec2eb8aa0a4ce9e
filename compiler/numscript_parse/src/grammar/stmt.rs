//! Statement parsing.

use numscript_ir::{
    Allocation, AllocationBranch, Block, BranchPortion, Conditional, Ident, Overdraft, Send,
    Source, Statement, StatementKind, StringLit, TokenKind, Type, TypeAnnotation, VarDecl,
};
use tracing::trace;

use crate::recovery::{self, BLOCK_BOUNDARY, STMT_START, VAR_DECL_BOUNDARY};
use crate::{ParseError, Parser};

const NESTED_VARS: &str = "`vars` blocks are only allowed at the top level";

impl Parser<'_> {
    /// Parse `vars { .. }`, pushing one `VarDecl` statement per declaration.
    ///
    /// A declaration that fails to parse is skipped up to the next type name
    /// or `}`. A missing `}` is reported where the next statement starts.
    pub(crate) fn parse_vars_block(&mut self, out: &mut Vec<Statement>) {
        let start = self.cursor.position();
        self.cursor.advance();
        if let Err(error) = self.cursor.expect(TokenKind::LBrace) {
            self.errors.push(error);
            recovery::recover(&mut self.cursor, start, STMT_START);
            return;
        }

        loop {
            match self.cursor.current_kind() {
                TokenKind::RBrace => {
                    self.cursor.advance();
                    return;
                }
                kind if STMT_START.contains(kind) => {
                    if !self.abandoned {
                        self.errors.push(self.cursor.make_expect_error("`}`"));
                    }
                    return;
                }
                _ => {}
            }

            let decl_start = self.cursor.position();
            match self.parse_var_decl() {
                Ok(stmt) => out.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    recovery::recover(&mut self.cursor, decl_start, VAR_DECL_BOUNDARY);
                }
            }
        }
    }

    fn parse_var_decl(&mut self) -> Result<Statement, ParseError> {
        let start = self.cursor.current_range().start;

        if !self.cursor.check(TokenKind::Ident) {
            return Err(self.cursor.make_expect_error("type name"));
        }
        let type_token = self.cursor.advance();
        let type_name = self.cursor.slice(type_token);
        let ty = TypeAnnotation {
            name: type_name.to_string(),
            ty: Type::from_name(type_name),
            range: type_token.range,
        };

        let var_token = self.cursor.expect(TokenKind::Variable)?;
        let var_text = self.cursor.slice(var_token);
        let name = Ident {
            name: var_text.strip_prefix('$').unwrap_or(var_text).to_string(),
            range: var_token.range,
        };

        let default = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        trace!(name = %name.name, ty = %ty.name, "var decl");
        Ok(Statement {
            kind: StatementKind::VarDecl(VarDecl { name, ty, default }),
            range: self.cursor.range_from(start),
        })
    }

    /// Parse one statement. `vars` is rejected here; callers handle it.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.cursor.current_range().start;
        let kind = match self.cursor.current_kind() {
            TokenKind::Send => self.parse_send()?,
            TokenKind::Allocate => self.parse_allocate()?,
            TokenKind::SetTxMeta => self.parse_set_tx_meta()?,
            TokenKind::SetAccountMeta => self.parse_set_account_meta()?,
            TokenKind::If => StatementKind::If(self.nested(Self::parse_if)?),
            TokenKind::Vars => {
                return Err(ParseError::new(self.cursor.current_range(), NESTED_VARS));
            }
            _ => return Err(self.cursor.make_expect_error("statement")),
        };
        Ok(Statement {
            kind,
            range: self.cursor.range_from(start),
        })
    }

    fn parse_send(&mut self) -> Result<StatementKind, ParseError> {
        self.cursor.advance();
        let amount = self.parse_expr()?;
        self.cursor.expect(TokenKind::From)?;
        let source = self.parse_source()?;
        self.cursor.expect(TokenKind::To)?;
        let destination = self.parse_expr()?;
        Ok(StatementKind::Send(Send {
            amount,
            source,
            destination,
        }))
    }

    fn parse_source(&mut self) -> Result<Source, ParseError> {
        let start = self.cursor.current_range().start;
        let account = self.parse_expr()?;

        let overdraft = if self.cursor.eat(TokenKind::Allowing) {
            if self.cursor.eat(TokenKind::Unbounded) {
                self.cursor.expect(TokenKind::Overdraft)?;
                Some(Overdraft::Unbounded)
            } else if self.cursor.eat(TokenKind::Overdraft) {
                self.cursor.expect(TokenKind::Up)?;
                self.cursor.expect(TokenKind::To)?;
                Some(Overdraft::UpTo(self.parse_expr()?))
            } else {
                return Err(self.cursor.make_expect_error("`unbounded` or `overdraft`"));
            }
        } else {
            None
        };

        Ok(Source {
            account,
            overdraft,
            range: self.cursor.range_from(start),
        })
    }

    fn parse_allocate(&mut self) -> Result<StatementKind, ParseError> {
        self.cursor.advance();
        let amount = self.parse_expr()?;
        self.cursor.expect(TokenKind::From)?;
        let source = self.parse_source()?;
        self.cursor.expect(TokenKind::LBrace)?;

        let mut branches = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.make_expect_error("`}`"));
            }
            branches.push(self.parse_branch()?);
        }
        let close = self.cursor.advance().range;

        if branches.is_empty() {
            return Err(ParseError::new(
                close,
                "expected at least one allocation branch",
            ));
        }
        Ok(StatementKind::Allocate(Allocation {
            amount,
            source,
            branches,
        }))
    }

    fn parse_branch(&mut self) -> Result<AllocationBranch, ParseError> {
        let start = self.cursor.current_range().start;
        let portion = if self.cursor.check(TokenKind::Remaining) {
            let token = self.cursor.advance();
            BranchPortion::Remaining { range: token.range }
        } else {
            BranchPortion::Share(self.parse_expr()?)
        };
        self.cursor.expect(TokenKind::To)?;
        let destination = self.parse_expr()?;
        Ok(AllocationBranch {
            portion,
            destination,
            range: self.cursor.range_from(start),
        })
    }

    fn parse_set_tx_meta(&mut self) -> Result<StatementKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let key = self.parse_string_lit()?;
        self.cursor.expect(TokenKind::Comma)?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(StatementKind::SetTxMeta { key, value })
    }

    fn parse_set_account_meta(&mut self) -> Result<StatementKind, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let account = self.parse_expr()?;
        self.cursor.expect(TokenKind::Comma)?;
        let key = self.parse_string_lit()?;
        self.cursor.expect(TokenKind::Comma)?;
        let value = self.parse_expr()?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(StatementKind::SetAccountMeta {
            account,
            key,
            value,
        })
    }

    fn parse_string_lit(&mut self) -> Result<StringLit, ParseError> {
        let token = self.cursor.expect(TokenKind::String)?;
        Ok(StringLit {
            value: string_body(self.cursor.slice(token)),
            range: token.range,
        })
    }

    /// `if <cond> { .. } (else (if .. | { .. }))?`
    ///
    /// `else if` becomes an else block holding the nested conditional.
    fn parse_if(&mut self) -> Result<Conditional, ParseError> {
        self.cursor.advance();
        let condition = self.parse_expr()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.cursor.eat(TokenKind::Else) {
            if self.cursor.check(TokenKind::If) {
                let start = self.cursor.current_range().start;
                let nested = self.nested(Self::parse_if)?;
                let range = self.cursor.range_from(start);
                Some(Block {
                    statements: vec![Statement {
                        kind: StatementKind::If(nested),
                        range,
                    }],
                    range,
                })
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Ok(Conditional {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `{ statement* }`. Errors inside the block are recovered locally, so
    /// only a missing `{` fails the block itself.
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.cursor.current_range().start;
        self.cursor.expect(TokenKind::LBrace)?;

        let mut statements = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBrace => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Eof => {
                    if !self.abandoned {
                        self.errors.push(self.cursor.make_expect_error("`}`"));
                    }
                    break;
                }
                TokenKind::Vars => {
                    self.errors
                        .push(ParseError::new(self.cursor.current_range(), NESTED_VARS));
                    let mut discarded = Vec::new();
                    self.parse_vars_block(&mut discarded);
                }
                _ => {
                    let stmt_start = self.cursor.position();
                    match self.parse_statement() {
                        Ok(stmt) => statements.push(stmt),
                        Err(error) => {
                            self.errors.push(error);
                            recovery::recover(&mut self.cursor, stmt_start, BLOCK_BOUNDARY);
                        }
                    }
                }
            }
        }

        Ok(Block {
            statements,
            range: self.cursor.range_from(start),
        })
    }
}

/// Body of a string literal token with escapes resolved.
pub(super) fn string_body(text: &str) -> String {
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    numscript_lexer::unescape_string(inner)
}
