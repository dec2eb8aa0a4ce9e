//! Binary and unary operator implementations.
//!
//! The value set is closed, so dispatch is a plain `match` on operand pairs.
//! `&&` and `||` never reach this module: they short-circuit in the
//! evaluator.

use std::cmp::Ordering;

use num_traits::Signed;
use numscript_ir::{BinaryOp, Type, UnaryOp};

use crate::errors::{EvalError, EvalResult};
use crate::value::{Monetary, Value};

pub(crate) fn eval_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult<Value> {
    match op {
        BinaryOp::Add | BinaryOp::Sub => eval_arithmetic(op, left, right),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare(&left, &right)?;
            let result = match op {
                BinaryOp::Lt => ordering.is_lt(),
                BinaryOp::LtEq => ordering.is_le(),
                BinaryOp::Gt => ordering.is_gt(),
                _ => ordering.is_ge(),
            };
            Ok(Value::Bool(result))
        }
        BinaryOp::Eq | BinaryOp::NotEq => {
            if left.ty() != right.ty() {
                return Err(EvalError::type_mismatch(left.ty(), right.ty()));
            }
            Ok(Value::Bool((left == right) == (op == BinaryOp::Eq)))
        }
        BinaryOp::And | BinaryOp::Or => match (left, right) {
            (Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(if op == BinaryOp::And {
                l && r
            } else {
                l || r
            })),
            (Value::Bool(_), other) | (other, _) => {
                Err(EvalError::type_mismatch(Type::Bool, other.ty()))
            }
        },
    }
}

fn eval_arithmetic(op: BinaryOp, left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(if op == BinaryOp::Add {
            l + r
        } else {
            l - r
        })),
        (Value::Monetary(l), Value::Monetary(r)) => {
            if l.asset != r.asset {
                return Err(EvalError::mismatched_assets(&l.asset, &r.asset));
            }
            let amount = if op == BinaryOp::Add {
                l.amount + r.amount
            } else {
                l.amount - r.amount
            };
            if amount.is_negative() {
                return Err(EvalError::negative_amount());
            }
            Ok(Value::Monetary(Monetary::new(l.asset, amount)))
        }
        (left, right) => Err(operand_mismatch(&left, &right)),
    }
}

/// Order two numbers or two monetary amounts of the same asset.
fn compare(left: &Value, right: &Value) -> EvalResult<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(l.cmp(r)),
        (Value::Monetary(l), Value::Monetary(r)) => {
            if l.asset != r.asset {
                return Err(EvalError::mismatched_assets(&l.asset, &r.asset));
            }
            Ok(l.amount.cmp(&r.amount))
        }
        _ => Err(operand_mismatch(left, right)),
    }
}

/// Report the first operand that breaks the "two numbers or two monetary
/// amounts" rule.
#[cold]
fn operand_mismatch(left: &Value, right: &Value) -> EvalError {
    match left.ty() {
        expected @ (Type::Number | Type::Monetary) => EvalError::type_mismatch(expected, right.ty()),
        got => EvalError::type_mismatch(Type::Number, got),
    }
}

pub(crate) fn eval_unary(op: UnaryOp, operand: Value) -> EvalResult<Value> {
    match (op, operand) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, other) => Err(EvalError::type_mismatch(Type::Bool, other.ty())),
        (UnaryOp::Neg, other) => Err(EvalError::type_mismatch(Type::Number, other.ty())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::EvalErrorKind;
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    fn usd(amount: i64) -> Value {
        Value::Monetary(Monetary::new("USD", amount))
    }

    fn number(n: i64) -> Value {
        Value::Number(BigInt::from(n))
    }

    #[test]
    fn test_monetary_arithmetic() {
        assert_eq!(eval_binary(BinaryOp::Add, usd(40), usd(2)).unwrap(), usd(42));
        assert_eq!(eval_binary(BinaryOp::Sub, usd(40), usd(40)).unwrap(), usd(0));
    }

    #[test]
    fn test_monetary_subtraction_below_zero() {
        let error = eval_binary(BinaryOp::Sub, usd(1), usd(2)).unwrap_err();
        assert_eq!(error.kind, EvalErrorKind::NegativeAmount);
    }

    #[test]
    fn test_number_subtraction_may_go_negative() {
        assert_eq!(
            eval_binary(BinaryOp::Sub, number(1), number(3)).unwrap(),
            number(-2)
        );
    }

    #[test]
    fn test_mismatched_assets() {
        let eur = Value::Monetary(Monetary::new("EUR", 1));
        let error = eval_binary(BinaryOp::Add, usd(1), eur).unwrap_err();
        assert_eq!(
            error.kind,
            EvalErrorKind::MismatchedAssets {
                left: "USD".to_string(),
                right: "EUR".to_string(),
            }
        );
    }

    #[test]
    fn test_mixed_operands() {
        let error = eval_binary(BinaryOp::Add, usd(1), number(1)).unwrap_err();
        assert_eq!(
            error.kind,
            EvalErrorKind::TypeMismatch {
                expected: Type::Monetary,
                got: Type::Number,
            }
        );

        let error = eval_binary(BinaryOp::Lt, Value::Bool(true), number(1)).unwrap_err();
        assert_eq!(
            error.kind,
            EvalErrorKind::TypeMismatch {
                expected: Type::Number,
                got: Type::Bool,
            }
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(
            eval_binary(BinaryOp::GtEq, usd(5), usd(5)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eval_binary(BinaryOp::Lt, number(7), number(-1)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eval_binary(BinaryOp::NotEq, Value::String("a".into()), Value::String("b".into()))
                .unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_equality_requires_same_type() {
        let error = eval_binary(BinaryOp::Eq, number(1), Value::String("1".into())).unwrap_err();
        assert_eq!(
            error.kind,
            EvalErrorKind::TypeMismatch {
                expected: Type::Number,
                got: Type::String,
            }
        );
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval_unary(UnaryOp::Neg, number(3)).unwrap(), number(-3));
        assert_eq!(
            eval_unary(UnaryOp::Not, Value::Bool(false)).unwrap(),
            Value::Bool(true)
        );
        assert!(eval_unary(UnaryOp::Neg, usd(3)).is_err());
    }
}
