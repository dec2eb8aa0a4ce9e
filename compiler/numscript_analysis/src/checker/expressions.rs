//! Expression typing.
//!
//! `infer` returns `None` when the type cannot be known because of an
//! earlier problem (undeclared variable, unknown declared type, ill-typed
//! operand). Callers treat `None` as compatible with everything so one
//! mistake is reported once.

use num_traits::Zero;
use numscript_diagnostic::DiagnosticKind;
use numscript_ir::{BinaryOp, Expr, ExprKind, Type, UnaryOp};
use numscript_stack::ensure_sufficient_stack;

use super::Checker;

impl Checker {
    /// Check that `expr` has type `expected`.
    pub(super) fn expect_type(&mut self, expr: &Expr, expected: Type) {
        if let Some(got) = self.infer(expr) {
            if got != expected {
                self.report(expr.range, DiagnosticKind::TypeMismatch { expected, got });
            }
        }
    }

    pub(super) fn infer(&mut self, expr: &Expr) -> Option<Type> {
        ensure_sufficient_stack(|| self.infer_kind(expr))
    }

    fn infer_kind(&mut self, expr: &Expr) -> Option<Type> {
        match &expr.kind {
            ExprKind::Monetary { .. } => Some(Type::Monetary),
            ExprKind::Account(_) => Some(Type::Account),
            ExprKind::Asset(_) => Some(Type::Asset),
            ExprKind::String(_) => Some(Type::String),
            ExprKind::Number(_) => Some(Type::Number),
            ExprKind::Bool(_) => Some(Type::Bool),
            ExprKind::Portion { denominator, .. } => {
                if denominator.is_zero() {
                    self.report(expr.range, DiagnosticKind::DivisionByZero);
                }
                Some(Type::Portion)
            }
            ExprKind::Variable(name) => self.use_variable(name, expr),
            ExprKind::Balance { account, asset } => {
                self.expect_type(account, Type::Account);
                self.expect_type(asset, Type::Asset);
                Some(Type::Monetary)
            }
            ExprKind::Meta { account, key } => {
                self.expect_type(account, Type::Account);
                self.expect_type(key, Type::String);
                Some(Type::String)
            }
            ExprKind::Binary { op, left, right } => self.infer_binary(*op, left, right),
            ExprKind::Unary { op, operand } => {
                let expected = match op {
                    UnaryOp::Not => Type::Bool,
                    UnaryOp::Neg => Type::Number,
                };
                self.expect_type(operand, expected);
                Some(expected)
            }
        }
    }

    /// A variable is usable once the walk has passed its first declaration.
    /// An earlier use still counts as a use, so it is not also reported as
    /// unused.
    fn use_variable(&mut self, name: &str, expr: &Expr) -> Option<Type> {
        if let Some(info) = self.variables.get_mut(name) {
            info.used = true;
            if info.visible {
                return info.ty;
            }
        }
        self.report(
            expr.range,
            DiagnosticKind::UnboundVariable {
                name: name.to_string(),
            },
        );
        None
    }

    fn infer_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Option<Type> {
        match op {
            BinaryOp::Add | BinaryOp::Sub => self.numeric_operands(left, right),
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
                self.numeric_operands(left, right);
                Some(Type::Bool)
            }
            BinaryOp::Eq | BinaryOp::NotEq => {
                let left_ty = self.infer(left);
                let right_ty = self.infer(right);
                if let (Some(expected), Some(got)) = (left_ty, right_ty) {
                    if expected != got {
                        self.report(right.range, DiagnosticKind::TypeMismatch { expected, got });
                    }
                }
                Some(Type::Bool)
            }
            BinaryOp::And | BinaryOp::Or => {
                self.expect_type(left, Type::Bool);
                self.expect_type(right, Type::Bool);
                Some(Type::Bool)
            }
        }
    }

    /// Both operands must be `number` or both `monetary`. Returns the shared
    /// operand type.
    fn numeric_operands(&mut self, left: &Expr, right: &Expr) -> Option<Type> {
        let left_ty = self.infer(left);
        let operand_ty = match left_ty {
            Some(ty @ (Type::Number | Type::Monetary)) => Some(ty),
            Some(got) => {
                self.report(
                    left.range,
                    DiagnosticKind::TypeMismatch {
                        expected: Type::Number,
                        got,
                    },
                );
                None
            }
            None => None,
        };

        match operand_ty {
            Some(expected) => self.expect_type(right, expected),
            None => {
                self.infer(right);
            }
        }
        operand_ty
    }
}
