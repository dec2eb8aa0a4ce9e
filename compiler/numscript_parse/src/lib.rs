//! Parser for Numscript.
//!
//! Recursive descent over the lexer's `TokenList`; expressions use
//! precedence climbing. A malformed statement is recorded as a
//! [`ParseError`] and the parser resynchronizes at the next statement
//! keyword, at a closing `}` inside a block, or at end of file, so a single
//! pass reports every independent syntax error.
//!
//! Nesting (parentheses, prefix operators, `if` chains) is capped at
//! [`MAX_NESTING`]. Past the cap the parser reports one error and stops.

mod cursor;
mod error;
mod grammar;
mod recovery;

use numscript_ir::{Position, Program, Range, TokenKind, TokenList};
use numscript_stack::ensure_sufficient_stack;
use tracing::{debug, trace, warn};

use cursor::Cursor;
pub use error::{parse_errors_to_string, ParseError};
pub use recovery::{synchronize, TokenSet};

/// Deepest nesting of expressions and `if` statements the parser accepts.
pub const MAX_NESTING: u32 = 512;

/// Parser state: the token cursor plus the errors recorded so far.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    depth: u32,
    /// Set once the nesting cap is hit; the rest of the input is skipped.
    abandoned: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            errors: Vec::new(),
            depth: 0,
            abandoned: false,
        }
    }

    /// Run one level of recursive descent, enforcing [`MAX_NESTING`].
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            let range = self.cursor.current_range();
            warn!(depth = self.depth, "nesting limit reached");
            self.abandoned = true;
            synchronize(&mut self.cursor, TokenSet::new());
            return Err(ParseError::new(
                range,
                format!("nesting exceeds the limit of {MAX_NESTING} levels"),
            ));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Parse the whole token stream into a program.
    pub fn parse_program(mut self) -> ParseResult {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            trace!(token = ?self.cursor.current_kind(), "top-level item");

            if self.cursor.check(TokenKind::Vars) {
                self.parse_vars_block(&mut statements);
                continue;
            }

            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    recovery::recover(&mut self.cursor, start, recovery::STMT_START);
                }
            }
        }

        let end = self.cursor.current_range().end;
        let program = Program {
            statements,
            range: Range::new(Position::default(), end),
        };
        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseResult {
            program,
            errors: self.errors,
        }
    }
}

/// Parse result: the (possibly partial) program and every syntax error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse `source`. Never fails; syntax errors are in the result.
pub fn parse(source: &str) -> ParseResult {
    let tokens = numscript_lexer::lex(source);
    Parser::new(&tokens, source).parse_program()
}

#[cfg(test)]
mod tests;
