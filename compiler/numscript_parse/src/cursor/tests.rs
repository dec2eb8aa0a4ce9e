use super::*;
use pretty_assertions::assert_eq;

fn with_cursor<R>(source: &str, f: impl FnOnce(&mut Cursor<'_>) -> R) -> R {
    let tokens = numscript_lexer::lex(source);
    let mut cursor = Cursor::new(&tokens, source);
    f(&mut cursor)
}

#[test]
fn test_advance_stays_on_eof() {
    with_cursor("send", |cursor| {
        assert_eq!(cursor.advance().kind, TokenKind::Send);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 1);
    });
}

#[test]
fn test_expect_reports_found_token() {
    with_cursor("send }", |cursor| {
        cursor.advance();
        let err = cursor.expect(TokenKind::From).err();
        assert_eq!(
            err.map(|e| e.message),
            Some("expected `from`, found `}`".to_string())
        );
        assert_eq!(cursor.position(), 1);
    });
}

#[test]
fn test_describe_error_token_quotes_input() {
    with_cursor("#", |cursor| {
        assert_eq!(cursor.describe_current(), "unrecognized input `#`");
    });
}

#[test]
fn test_range_from_covers_consumed_tokens() {
    with_cursor("send [USD 10]", |cursor| {
        let start = cursor.current_range().start;
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(
            cursor.range_from(start),
            Range::new(Position::new(0, 0), Position::new(0, 13))
        );
    });
}

#[test]
fn test_slice_and_peek() {
    with_cursor("@users:1 to", |cursor| {
        let token = cursor.current();
        assert_eq!(cursor.slice(token), "@users:1");
        assert_eq!(cursor.peek_next_kind(), TokenKind::To);
        assert!(cursor.eat(TokenKind::Account));
        assert!(!cursor.eat(TokenKind::Account));
    });
}
