//! Lexer for Numscript using logos.
//!
//! Produces a `TokenList` terminated by a single `Eof` token. Whitespace,
//! newlines and comments are trivia and never reach the parser. Input that
//! matches no pattern becomes a `TokenKind::Error` token so the parser can
//! report it at the right place and keep going.

mod escape;
mod parse_helpers;

use logos::Logos;
use numscript_ir::{LineIndex, Span, Token, TokenKind, TokenList};

pub use escape::unescape_string;
pub use parse_helpers::{parse_integer, parse_percent};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // Keywords
    #[token("vars")]
    Vars,
    #[token("send")]
    Send,
    #[token("allocate")]
    Allocate,
    #[token("from")]
    From,
    #[token("to")]
    To,
    #[token("remaining")]
    Remaining,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("set_tx_meta")]
    SetTxMeta,
    #[token("set_account_meta")]
    SetAccountMeta,
    #[token("balance")]
    Balance,
    #[token("meta")]
    Meta,
    #[token("allowing")]
    Allowing,
    #[token("unbounded")]
    Unbounded,
    #[token("overdraft")]
    Overdraft,
    #[token("up")]
    Up,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Literals
    #[regex(r"@[a-zA-Z0-9_\-]+(:[a-zA-Z0-9_\-]+)*")]
    Account,
    #[regex(r"\$[a-z_][a-z0-9_]*")]
    Variable,
    #[regex(r"[A-Z][A-Z0-9_]*(/[0-9]+)?")]
    Asset,
    #[regex(r"[0-9][0-9_]*")]
    Number,
    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?%")]
    Percent,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // Punctuation
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // Identifier
    #[regex(r"[a-z_][a-z0-9_]*")]
    Ident,
}

/// Lex source code into a `TokenList`.
///
/// Never fails: unrecognized input becomes `Error` tokens. Sources larger
/// than `u32::MAX` bytes get their trailing spans clamped.
pub fn lex(source: &str) -> TokenList {
    let index = LineIndex::new(source);
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let kind = match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => continue,
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span, index.range(span)));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    let eof_span = Span::point(eof_pos);
    result.push(Token::new(TokenKind::Eof, eof_span, index.range(eof_span)));

    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        // Keywords
        RawToken::Vars => TokenKind::Vars,
        RawToken::Send => TokenKind::Send,
        RawToken::Allocate => TokenKind::Allocate,
        RawToken::From => TokenKind::From,
        RawToken::To => TokenKind::To,
        RawToken::Remaining => TokenKind::Remaining,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::SetTxMeta => TokenKind::SetTxMeta,
        RawToken::SetAccountMeta => TokenKind::SetAccountMeta,
        RawToken::Balance => TokenKind::Balance,
        RawToken::Meta => TokenKind::Meta,
        RawToken::Allowing => TokenKind::Allowing,
        RawToken::Unbounded => TokenKind::Unbounded,
        RawToken::Overdraft => TokenKind::Overdraft,
        RawToken::Up => TokenKind::Up,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        // Literals
        RawToken::Account => TokenKind::Account,
        RawToken::Variable => TokenKind::Variable,
        RawToken::Asset => TokenKind::Asset,
        RawToken::Number => TokenKind::Number,
        RawToken::Percent => TokenKind::Percent,
        RawToken::String => TokenKind::String,
        RawToken::Ident => TokenKind::Ident,

        // Punctuation
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,

        // Trivia is filtered before conversion.
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
