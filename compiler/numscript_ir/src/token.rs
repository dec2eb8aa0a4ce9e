//! Token definitions shared by the lexer and the parser.
//!
//! Token kinds are fieldless so that recovery sets can be built in `const`
//! contexts; literal payloads are read back from the source through the
//! token's byte [`Span`].

use std::fmt;
use std::ops::Index;

use crate::{Range, Span};

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Vars,
    Send,
    Allocate,
    From,
    To,
    Remaining,
    If,
    Else,
    SetTxMeta,
    SetAccountMeta,
    Balance,
    Meta,
    Allowing,
    Unbounded,
    Overdraft,
    Up,
    True,
    False,

    // Literals
    /// Bare lowercase word; type names in `vars` blocks.
    Ident,
    /// `@users:001`
    Account,
    /// `$amount`
    Variable,
    /// `USD`, `USD/2`
    Asset,
    /// `100`, `1_000`
    Number,
    /// `50%`, `12.5%`
    Percent,
    /// `"text"`
    String,

    // Punctuation
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Slash,
    Bang,
    AmpAmp,
    PipePipe,

    /// Input the lexer could not recognize.
    Error,
    Eof,
}

impl TokenKind {
    /// Dense index used by bitset token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Whether this token starts a statement. Used for error recovery.
    pub const fn is_statement_start(self) -> bool {
        matches!(
            self,
            TokenKind::Vars
                | TokenKind::Send
                | TokenKind::Allocate
                | TokenKind::SetTxMeta
                | TokenKind::SetAccountMeta
                | TokenKind::If
        )
    }

    /// Human-readable description for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Vars => "`vars`",
            TokenKind::Send => "`send`",
            TokenKind::Allocate => "`allocate`",
            TokenKind::From => "`from`",
            TokenKind::To => "`to`",
            TokenKind::Remaining => "`remaining`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::SetTxMeta => "`set_tx_meta`",
            TokenKind::SetAccountMeta => "`set_account_meta`",
            TokenKind::Balance => "`balance`",
            TokenKind::Meta => "`meta`",
            TokenKind::Allowing => "`allowing`",
            TokenKind::Unbounded => "`unbounded`",
            TokenKind::Overdraft => "`overdraft`",
            TokenKind::Up => "`up`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Ident => "identifier",
            TokenKind::Account => "account literal",
            TokenKind::Variable => "variable",
            TokenKind::Asset => "asset",
            TokenKind::Number => "number literal",
            TokenKind::Percent => "percentage literal",
            TokenKind::String => "string literal",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Eq => "`=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its byte span and its line/character range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub range: Range,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, range: Range) -> Self {
        Token { kind, span, range }
    }
}

/// Lexer output. Always terminated by exactly one `Eof` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
