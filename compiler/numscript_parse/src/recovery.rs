//! Error recovery for the parser.
//!
//! Token sets use a bitset for O(1) membership testing, so recovery sets can
//! be declared as constants.

use numscript_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds. Each bit corresponds to a `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Keywords that start a statement, plus end of file.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Vars)
    .with(TokenKind::Send)
    .with(TokenKind::Allocate)
    .with(TokenKind::SetTxMeta)
    .with(TokenKind::SetAccountMeta)
    .with(TokenKind::If)
    .with(TokenKind::Eof);

/// Recovery set inside a `{ .. }` statement block.
pub const BLOCK_BOUNDARY: TokenSet = STMT_START.with(TokenKind::RBrace);

/// Recovery set inside a `vars { .. }` block: the next type name.
pub const VAR_DECL_BOUNDARY: TokenSet = BLOCK_BOUNDARY.with(TokenKind::Ident);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}

/// Recover after a failed construct that started at token index `start`.
///
/// Always consumes at least one token (unless already at EOF) so the caller's
/// loop makes progress, then synchronizes on `recovery`.
pub fn recover(cursor: &mut Cursor<'_>, start: usize, recovery: TokenSet) -> bool {
    if cursor.position() == start {
        cursor.advance();
    }
    synchronize(cursor, recovery)
}
