use super::*;
use numscript_ir::{Position, Range};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds().collect()
}

fn slices(source: &str) -> Vec<&str> {
    lex(source)
        .iter()
        .map(|t| &source[t.span.to_range()])
        .collect()
}

#[test]
fn test_lex_send_statement() {
    use TokenKind::*;
    assert_eq!(
        kinds("send [USD/2 100] from @users:001 to $dest"),
        vec![Send, LBracket, Asset, Number, RBracket, From, Account, To, Variable, Eof]
    );
}

#[test]
fn test_lex_keywords_vs_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("to total remaining remainder up upper"),
        vec![To, Ident, Remaining, Ident, Up, Ident, Eof]
    );
    assert_eq!(
        kinds("set_tx_meta set_account_meta set_other"),
        vec![SetTxMeta, SetAccountMeta, Ident, Eof]
    );
}

#[test]
fn test_lex_numbers_and_portions() {
    use TokenKind::*;
    assert_eq!(
        kinds("1_000 1/3 50% 12.5%"),
        vec![Number, Number, Slash, Number, Percent, Percent, Eof]
    );
    assert_eq!(slices("12.5% 7"), vec!["12.5%", "7", ""]);
}

#[test]
fn test_lex_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("== != <= >= < > = ! && || + -"),
        vec![EqEq, NotEq, LtEq, GtEq, Lt, Gt, Eq, Bang, AmpAmp, PipePipe, Plus, Minus, Eof]
    );
}

#[test]
fn test_lex_strings() {
    let source = r#"set_tx_meta("note", "say \"hi\"")"#;
    use TokenKind::*;
    assert_eq!(
        kinds(source),
        vec![SetTxMeta, LParen, String, Comma, String, RParen, Eof]
    );
    assert_eq!(slices(source)[4], r#""say \"hi\"""#);
}

#[test]
fn test_lex_skips_comments_and_newlines() {
    use TokenKind::*;
    let source = "// leading\nsend /* inline\n comment */ [COIN 1]\n// trailing";
    assert_eq!(
        kinds(source),
        vec![Send, LBracket, Asset, Number, RBracket, Eof]
    );
}

#[test]
fn test_lex_unknown_input_is_error_token() {
    use TokenKind::*;
    assert_eq!(kinds("send # 1"), vec![Send, Error, Number, Eof]);
    assert_eq!(kinds("&"), vec![Error, Eof]);
}

#[test]
fn test_lex_ranges_use_lines_and_code_points() {
    let source = "send [USD 100]\n  from @a";
    let tokens = lex(source);
    let from = tokens.iter().find(|t| t.kind == TokenKind::From);
    assert_eq!(
        from.map(|t| t.range),
        Some(Range::new(Position::new(1, 2), Position::new(1, 6)))
    );

    let unicode = lex("\"é\" @a");
    assert_eq!(unicode[1].range.start, Position::new(0, 4));
}

#[test]
fn test_lex_empty_source() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].range.start, Position::new(0, 0));
}

#[test]
fn test_lex_eof_at_end() {
    let source = "vars {\n}\n";
    let tokens = lex(source);
    let eof = tokens[tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(9));
    assert_eq!(eof.range.start, Position::new(2, 0));
}
