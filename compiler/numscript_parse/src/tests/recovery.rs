//! Error reporting and recovery tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use numscript_ir::{Position, StatementKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{parse, parse_errors_to_string};

fn messages(source: &str) -> Vec<String> {
    parse(source).errors.into_iter().map(|e| e.message).collect()
}

#[test]
fn test_missing_keyword_reports_found_token() {
    let result = parse("send [USD 100] from @a }");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "expected `to`, found `}`");
    assert_eq!(result.errors[0].range.start, Position::new(0, 23));
}

#[test]
fn test_recovers_at_next_statement() {
    let result = parse(
        "send [USD 1] from to @b\nsend [USD 2] from @a to @b\nset_tx_meta(1, 2)\nset_tx_meta(\"k\", 2)",
    );
    assert_eq!(
        result.errors.iter().map(|e| e.range.start.line).collect::<Vec<_>>(),
        vec![0, 2]
    );
    assert_eq!(result.program.statements.len(), 2);
    assert!(matches!(
        result.program.statements[1].kind,
        StatementKind::SetTxMeta { .. }
    ));
}

#[test]
fn test_garbage_between_statements() {
    let result = parse("# $ send [USD 1] from @a to @b");
    assert_eq!(
        messages("# send [USD 1] from @a to @b"),
        vec!["expected statement, found unrecognized input `#`"]
    );
    assert_eq!(result.program.statements.len(), 1);
}

#[test]
fn test_recovery_inside_block_stops_at_brace() {
    let result = parse("if true { send oops } send [USD 1] from @a to @b");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.program.statements.len(), 2);

    let StatementKind::If(cond) = &result.program.statements[0].kind else {
        panic!("expected if");
    };
    assert!(cond.then_branch.statements.is_empty());
}

#[test]
fn test_vars_block_recovers_per_declaration() {
    let result = parse("vars {\n  account\n  monetary $m\n}");
    assert_eq!(messages("vars {\n  account\n  monetary $m\n}"), vec![
        "expected variable, found identifier"
    ]);
    assert_eq!(result.program.declarations().count(), 1);
}

#[test]
fn test_vars_block_missing_close_brace() {
    let result = parse("vars { account $a\nsend [USD 1] from @a to $a");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "expected `}`, found `send`");
    assert_eq!(result.program.statements.len(), 2);
}

#[test]
fn test_nested_vars_rejected() {
    let errors = messages("if true { vars { account $a } }");
    assert_eq!(errors, vec!["`vars` blocks are only allowed at the top level"]);
}

#[test]
fn test_chained_comparison_rejected() {
    let errors = messages("if 1 < 2 < 3 { }");
    assert_eq!(errors, vec!["comparison operators cannot be chained"]);
}

#[test]
fn test_empty_allocation_rejected() {
    let errors = messages("allocate [USD 1] from @a { }");
    assert_eq!(errors, vec!["expected at least one allocation branch"]);
}

#[test]
fn test_unterminated_block_at_eof() {
    let result = parse("if true { send [USD 1] from @a to @b");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "expected `}`, found end of file");
    assert_eq!(result.program.statements.len(), 1);
}

#[test]
fn test_parse_errors_to_string_renders_snippets() {
    let source = "send [USD 1] from @a to @b\nsend [USD 100] from @a }";
    let result = parse(source);
    let rendered = parse_errors_to_string(&result.errors, source);
    let expected = [
        "error: expected `to`, found `}`",
        " --> 2:24",
        "  |",
        "2 | send [USD 100] from @a }",
        &format!("  | {}^", " ".repeat(23)),
        "",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn test_errors_are_in_document_order() {
    let result = parse("send\nsend\nsend");
    let lines: Vec<u32> = result.errors.iter().map(|e| e.range.start.line).collect();
    assert_eq!(lines, vec![1, 2, 2]);
}

proptest! {
    #[test]
    fn parse_never_panics(source in "\\PC{0,80}") {
        let _ = parse(&source);
    }

    #[test]
    fn parse_terminates_on_token_soup(
        words in proptest::collection::vec(
            prop_oneof![
                Just("send"), Just("from"), Just("to"), Just("{"), Just("}"),
                Just("vars"), Just("if"), Just("else"), Just("allocate"),
                Just("[USD 1]"), Just("@a"), Just("$x"), Just("("), Just(")"),
                Just("remaining"), Just("1/3"), Just("<"), Just("#"),
            ],
            0..40,
        )
    ) {
        let source = words.join(" ");
        let result = parse(&source);
        for error in &result.errors {
            prop_assert!(error.range.start <= error.range.end);
        }
    }
}

fn wrapped(open: &str, depth: usize, inner: &str, close: &str) -> String {
    format!("{}{inner}{}", open.repeat(depth), close.repeat(depth))
}

#[test]
fn test_deep_parentheses_report_one_nesting_error() {
    let amount = wrapped("(", 100_000, "[USD 1]", ")");
    let source = format!("send {amount} from @a to @b\nsend [USD 2] from @a to @b");
    let result = parse(&source);
    assert_eq!(
        messages(&source),
        vec!["nesting exceeds the limit of 512 levels"]
    );
    assert_eq!(result.errors[0].range.start.line, 0);
    assert!(result.program.statements.is_empty());
}

#[test]
fn test_deep_prefix_operators_report_one_nesting_error() {
    let condition = format!("{}true", "!".repeat(100_000));
    let source = format!("if {condition} {{ send [USD 1] from @a to @b }}");
    assert_eq!(
        messages(&source),
        vec!["nesting exceeds the limit of 512 levels"]
    );
}

#[test]
fn test_deep_if_blocks_report_one_nesting_error() {
    let source = wrapped("if true { ", 100_000, "send [USD 1] from @a to @b", " }");
    assert_eq!(
        messages(&source),
        vec!["nesting exceeds the limit of 512 levels"]
    );

    let chain = format!(
        "{}{{ send [USD 1] from @a to @b }}",
        "if false { } else ".repeat(100_000)
    );
    assert_eq!(messages(&chain), vec!["nesting exceeds the limit of 512 levels"]);
}

#[test]
fn test_nesting_below_limit_parses() {
    let amount = wrapped("(", 400, "[USD 1]", ")");
    let result = parse(&format!("send {amount} from @a to @b"));
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.program.statements.len(), 1);

    let source = wrapped("if true { ", 200, "send [USD 1] from @a to @b", " }");
    assert!(parse(&source).errors.is_empty());
}
