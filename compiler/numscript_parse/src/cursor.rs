//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use numscript_ir::{Position, Range, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a `TokenList` and the source it was lexed from.
///
/// Invariant: the position is always valid and the last token is `Eof`, so
/// `current()` never fails.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        debug_assert!(
            tokens.iter().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    /// Current index in the token stream. Compare before and after a parse
    /// step to tell whether tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_range(&self) -> Range {
        self.current().range
    }

    /// Kind of the token after the current one; `Eof` at the end.
    pub fn peek_next_kind(&self) -> TokenKind {
        if self.pos + 1 < self.tokens.len() {
            self.tokens[self.pos + 1].kind
        } else {
            TokenKind::Eof
        }
    }

    /// End of the last consumed token, or the current start if nothing was
    /// consumed yet.
    pub fn previous_end(&self) -> Position {
        if self.pos > 0 {
            self.tokens[self.pos - 1].range.end
        } else {
            self.current_range().start
        }
    }

    /// Range from `start` to the end of the last consumed token.
    pub fn range_from(&self, start: Position) -> Range {
        Range::new(start, self.previous_end().max(start))
    }

    /// Source text of a token.
    pub fn slice(&self, token: &Token) -> &'a str {
        self.source.get(token.span.to_range()).unwrap_or("")
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance to the next token, returning the consumed one. Stays on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let current = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        current
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind.display_name()))
        }
    }

    /// Build the "expected X, found Y" error at the current token.
    #[cold]
    pub fn make_expect_error(&self, expected: &str) -> ParseError {
        ParseError::new(
            self.current_range(),
            format!("expected {expected}, found {}", self.describe_current()),
        )
    }

    /// Description of the current token for error messages. Unrecognized
    /// input is quoted verbatim.
    pub fn describe_current(&self) -> String {
        let token = self.current();
        match token.kind {
            TokenKind::Error => format!("unrecognized input `{}`", self.slice(token)),
            kind => kind.display_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
