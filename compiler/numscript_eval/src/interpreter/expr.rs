//! Expression evaluation.
//!
//! Expressions never change the working copy. Every error is tagged with the
//! range of the innermost expression that produced it.

use num_traits::Signed;
use numscript_ir::{BinaryOp, Expr, ExprKind, Type};
use numscript_stack::ensure_sufficient_stack;

use super::Evaluator;
use crate::errors::{AllocationError, EvalError, EvalErrorKind, EvalResult};
use crate::operators::{eval_binary, eval_unary};
use crate::value::{Monetary, Portion, Value};

impl Evaluator<'_> {
    pub(super) fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(expr)).map_err(|e| e.at(expr.range))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Monetary { asset, amount } => {
                Ok(Value::Monetary(Monetary::new(asset.as_str(), amount.clone())))
            }
            ExprKind::Account(name) => Ok(Value::Account(name.clone())),
            ExprKind::Asset(asset) => Ok(Value::Asset(asset.clone())),
            ExprKind::String(s) => Ok(Value::String(s.clone())),
            ExprKind::Number(n) => Ok(Value::Number(n.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Portion {
                numerator,
                denominator,
            } => Portion::new(numerator.clone(), denominator.clone())
                .map(Value::Portion)
                .ok_or_else(|| {
                    EvalError::new(AllocationError::InvalidPortion {
                        portion: format!("{numerator}/{denominator}"),
                    })
                }),
            ExprKind::Variable(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::unbound(name)),
            ExprKind::Balance { account, asset } => {
                let account = self.eval_account(account)?;
                let asset = self.eval_asset(asset)?;
                let balance = self.ctx.balance(&account, &asset);
                if balance.is_negative() {
                    let kind = EvalErrorKind::NegativeBalance { account, asset };
                    return Err(EvalError::new(kind));
                }
                Ok(Value::Monetary(Monetary::new(asset, balance)))
            }
            ExprKind::Meta { account, key } => self.eval_meta(account, key).map(Value::String),
            ExprKind::Binary { op, left, right } => match op {
                BinaryOp::And => Ok(Value::Bool(self.eval_bool(left)? && self.eval_bool(right)?)),
                BinaryOp::Or => Ok(Value::Bool(self.eval_bool(left)? || self.eval_bool(right)?)),
                _ => {
                    let left = self.eval(left)?;
                    let right = self.eval(right)?;
                    eval_binary(*op, left, right)
                }
            },
            ExprKind::Unary { op, operand } => eval_unary(*op, self.eval(operand)?),
        }
    }

    /// Read account metadata from the working copy.
    pub(super) fn eval_meta(&self, account: &Expr, key: &Expr) -> EvalResult<String> {
        let account = self.eval_account(account)?;
        let key = self.eval_string(key)?;
        match self.ctx.metadata(&account, &key) {
            Some(value) => Ok(value.to_string()),
            None => Err(EvalError::new(EvalErrorKind::MissingMetadata { account, key })),
        }
    }

    pub(super) fn eval_account(&self, expr: &Expr) -> EvalResult<String> {
        match self.eval(expr)? {
            Value::Account(name) => Ok(name),
            other => Err(mismatch(expr, Type::Account, &other)),
        }
    }

    pub(super) fn eval_monetary(&self, expr: &Expr) -> EvalResult<Monetary> {
        match self.eval(expr)? {
            Value::Monetary(monetary) => Ok(monetary),
            other => Err(mismatch(expr, Type::Monetary, &other)),
        }
    }

    pub(super) fn eval_portion(&self, expr: &Expr) -> EvalResult<Portion> {
        match self.eval(expr)? {
            Value::Portion(portion) => Ok(portion),
            other => Err(mismatch(expr, Type::Portion, &other)),
        }
    }

    pub(super) fn eval_bool(&self, expr: &Expr) -> EvalResult<bool> {
        match self.eval(expr)? {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(expr, Type::Bool, &other)),
        }
    }

    fn eval_asset(&self, expr: &Expr) -> EvalResult<String> {
        match self.eval(expr)? {
            Value::Asset(asset) => Ok(asset),
            other => Err(mismatch(expr, Type::Asset, &other)),
        }
    }

    fn eval_string(&self, expr: &Expr) -> EvalResult<String> {
        match self.eval(expr)? {
            Value::String(s) => Ok(s),
            other => Err(mismatch(expr, Type::String, &other)),
        }
    }
}

#[cold]
fn mismatch(expr: &Expr, expected: Type, got: &Value) -> EvalError {
    EvalError::type_mismatch(expected, got.ty()).at(expr.range)
}
