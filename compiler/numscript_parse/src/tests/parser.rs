//! Core parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use num_bigint::BigInt;
use numscript_ir::{
    BinaryOp, BranchPortion, Expr, ExprKind, Overdraft, Position, Range, StatementKind, Type,
    UnaryOp,
};
use pretty_assertions::assert_eq;

use crate::{parse, ParseResult};

fn parse_ok(source: &str) -> ParseResult {
    let result = parse(source);
    assert!(
        !result.has_errors(),
        "unexpected errors: {:?}",
        result.errors
    );
    result
}

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

fn single_expr(source: &str) -> Expr {
    let result = parse_ok(&format!("set_tx_meta(\"k\", {source})"));
    match &result.program.statements[0].kind {
        StatementKind::SetTxMeta { value, .. } => value.clone(),
        other => panic!("expected set_tx_meta, got {other:?}"),
    }
}

#[test]
fn test_parse_send() {
    let result = parse_ok("send [USD/2 100] from @users:001 to $dest");
    assert_eq!(result.program.statements.len(), 1);

    let StatementKind::Send(send) = &result.program.statements[0].kind else {
        panic!("expected send");
    };
    assert_eq!(
        send.amount.kind,
        ExprKind::Monetary {
            asset: "USD/2".to_string(),
            amount: big(100)
        }
    );
    assert_eq!(send.source.account.as_account_literal(), Some("users:001"));
    assert_eq!(send.source.overdraft, None);
    assert_eq!(
        send.destination.kind,
        ExprKind::Variable("dest".to_string())
    );
    assert_eq!(
        result.program.statements[0].range,
        Range::new(Position::new(0, 0), Position::new(0, 41))
    );
}

#[test]
fn test_parse_overdraft_clauses() {
    let result = parse_ok(
        "send [USD 1] from @a allowing unbounded overdraft to @b\n\
         send [USD 1] from @a allowing overdraft up to [USD 10] to @b",
    );
    let overdrafts: Vec<_> = result
        .program
        .statements
        .iter()
        .map(|stmt| match &stmt.kind {
            StatementKind::Send(send) => send.source.overdraft.clone(),
            _ => panic!("expected send"),
        })
        .collect();
    assert_eq!(overdrafts[0], Some(Overdraft::Unbounded));
    assert!(matches!(
        &overdrafts[1],
        Some(Overdraft::UpTo(Expr { kind: ExprKind::Monetary { .. }, .. }))
    ));
}

#[test]
fn test_parse_vars_block() {
    let result = parse_ok(
        "vars {\n  account $dest\n  monetary $amt = [EUR 5]\n  money $bad\n}\nsend $amt from @a to $dest",
    );
    let decls: Vec<_> = result.program.declarations().collect();
    assert_eq!(decls.len(), 3);

    assert_eq!(decls[0].name.name, "dest");
    assert_eq!(decls[0].ty.ty, Some(Type::Account));
    assert_eq!(decls[0].default, None);

    assert_eq!(decls[1].ty.ty, Some(Type::Monetary));
    assert!(decls[1].default.is_some());

    assert_eq!(decls[2].ty.name, "money");
    assert_eq!(decls[2].ty.ty, None);
    assert_eq!(
        decls[2].ty.range,
        Range::new(Position::new(3, 2), Position::new(3, 7))
    );
    assert_eq!(result.program.statements.len(), 4);
}

#[test]
fn test_parse_allocate_branches() {
    let result = parse_ok(
        "allocate [COIN 10] from @world {\n  1/3 to @a\n  50% to @b\n  remaining to @c\n}",
    );
    let StatementKind::Allocate(allocation) = &result.program.statements[0].kind else {
        panic!("expected allocate");
    };
    assert_eq!(allocation.branches.len(), 3);
    assert_eq!(
        allocation.branches[0].portion,
        BranchPortion::Share(Expr::new(
            ExprKind::Portion {
                numerator: big(1),
                denominator: big(3)
            },
            Range::new(Position::new(1, 2), Position::new(1, 5))
        ))
    );
    assert!(!allocation.branches[1].keeps_remainder());
    assert!(allocation.branches[2].keeps_remainder());
    assert_eq!(allocation.branches[2].destination.as_account_literal(), Some("c"));
}

#[test]
fn test_parse_percent_is_exact() {
    assert_eq!(
        single_expr("12.5%").kind,
        ExprKind::Portion {
            numerator: big(125),
            denominator: big(1000)
        }
    );
}

#[test]
fn test_parse_metadata_statements() {
    let result = parse_ok(
        "set_tx_meta(\"reason\", \"refund\")\nset_account_meta(@users:1, \"tier\", \"gold\")",
    );
    match &result.program.statements[0].kind {
        StatementKind::SetTxMeta { key, value } => {
            assert_eq!(key.value, "reason");
            assert_eq!(value.kind, ExprKind::String("refund".to_string()));
        }
        other => panic!("unexpected {other:?}"),
    }
    match &result.program.statements[1].kind {
        StatementKind::SetAccountMeta {
            account, key, ..
        } => {
            assert_eq!(account.as_account_literal(), Some("users:1"));
            assert_eq!(key.value, "tier");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_parse_if_else_if_chain() {
    let result = parse_ok(
        "if $a { send [USD 1] from @x to @y } else if $b { } else { set_tx_meta(\"k\", 1) }",
    );
    let StatementKind::If(cond) = &result.program.statements[0].kind else {
        panic!("expected if");
    };
    assert_eq!(cond.then_branch.statements.len(), 1);

    let else_block = cond.else_branch.as_ref().expect("else block");
    assert_eq!(else_block.statements.len(), 1);
    let StatementKind::If(nested) = &else_block.statements[0].kind else {
        panic!("expected nested if");
    };
    assert!(nested.then_branch.statements.is_empty());
    assert_eq!(
        nested.else_branch.as_ref().map(|b| b.statements.len()),
        Some(1)
    );
}

#[test]
fn test_parse_precedence() {
    // `a || b && c == d + 1` groups as `a || (b && (c == (d + 1)))`.
    let expr = single_expr("$a || $b && $c == $d + 1");
    let ExprKind::Binary { op, right, .. } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Or);

    let ExprKind::Binary { op, right, .. } = right.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::And);

    let ExprKind::Binary { op, right, .. } = right.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Eq);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn test_parse_additive_is_left_associative() {
    let expr = single_expr("1 - 2 - 3");
    let ExprKind::Binary { op, left, right } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(right.kind, ExprKind::Number(big(3)));
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOp::Sub,
            ..
        }
    ));
}

#[test]
fn test_parse_unary_and_parens() {
    let expr = single_expr("!($flag)");
    let ExprKind::Unary { op, operand } = expr.kind else {
        panic!("expected unary");
    };
    assert_eq!(op, UnaryOp::Not);
    assert_eq!(operand.kind, ExprKind::Variable("flag".to_string()));

    let expr = single_expr("-5");
    assert!(matches!(
        expr.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));
}

#[test]
fn test_parse_queries() {
    let expr = single_expr("balance(@a, USD) > [USD 0]");
    let ExprKind::Binary { op, left, .. } = expr.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Gt);
    let ExprKind::Balance { account, asset } = left.kind else {
        panic!("expected balance");
    };
    assert_eq!(account.as_account_literal(), Some("a"));
    assert_eq!(asset.kind, ExprKind::Asset("USD".to_string()));

    let expr = single_expr("meta(@a, \"tier\")");
    assert!(matches!(expr.kind, ExprKind::Meta { .. }));
}

#[test]
fn test_parse_big_numbers() {
    let expr = single_expr("123456789012345678901234567890");
    assert_eq!(
        expr.kind,
        ExprKind::Number("123456789012345678901234567890".parse().unwrap())
    );
}

#[test]
fn test_parse_empty_and_comment_only() {
    assert!(parse_ok("").program.statements.is_empty());
    assert!(parse_ok("// nothing\n/* here */").program.statements.is_empty());
}

#[test]
fn test_ranges_count_code_points() {
    let result = parse_ok("set_tx_meta(\"é\", \"ü\") send [X 1] from @a to @b");
    assert_eq!(
        result.program.statements[1].range.start,
        Position::new(0, 22)
    );
}
