//! Statement execution.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use numscript_ir::{
    Allocation, BranchPortion, Conditional, Expr, Overdraft, Send, Source, Statement,
    StatementKind,
};
use numscript_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::Evaluator;
use crate::allocation::{split, Share};
use crate::errors::{EvalError, EvalErrorKind, EvalResult};
use crate::flags::FeatureFlag;
use crate::value::Monetary;

/// The account that may always overdraft.
const WORLD: &str = "world";

impl Evaluator<'_> {
    pub(super) fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<()> {
        ensure_sufficient_stack(|| {
            for stmt in statements {
                self.before_statement(stmt)?;
                self.exec_statement(stmt).map_err(|e| e.at(stmt.range))?;
            }
            Ok(())
        })
    }

    fn exec_statement(&mut self, stmt: &Statement) -> EvalResult<()> {
        trace!(range = %stmt.range.start, "statement");
        match &stmt.kind {
            StatementKind::VarDecl(_) => Ok(()),
            StatementKind::Send(send) => self.exec_send(send),
            StatementKind::Allocate(allocation) => self.exec_allocate(allocation),
            StatementKind::SetTxMeta { key, value } => {
                let value = self.eval(value)?;
                self.ctx.set_tx_metadata(key.value.clone(), value.to_string());
                Ok(())
            }
            StatementKind::SetAccountMeta {
                account,
                key,
                value,
            } => {
                let account = self.eval_account(account)?;
                let value = self.eval(value)?;
                self.ctx
                    .set_account_metadata(&account, &key.value, value.to_string());
                Ok(())
            }
            StatementKind::If(conditional) => self.exec_if(conditional),
        }
    }

    fn exec_send(&mut self, send: &Send) -> EvalResult<()> {
        let amount = self.eval_transfer_amount(&send.amount)?;
        let source = self.eval_account(&send.source.account)?;
        let destination = self.eval_account(&send.destination)?;

        self.check_funds(&send.source, &source, &amount)?;
        debug!(%source, %destination, %amount, "send");
        self.ctx
            .transfer(&source, &destination, &amount.asset, &amount.amount);
        Ok(())
    }

    fn exec_allocate(&mut self, allocation: &Allocation) -> EvalResult<()> {
        let total = self.eval_transfer_amount(&allocation.amount)?;
        let source = self.eval_account(&allocation.source.account)?;

        let mut shares = Vec::with_capacity(allocation.branches.len());
        let mut destinations = Vec::with_capacity(allocation.branches.len());
        for branch in &allocation.branches {
            shares.push(match &branch.portion {
                BranchPortion::Share(expr) => Share::Fixed(self.eval_portion(expr)?),
                BranchPortion::Remaining { .. } => Share::Remaining,
            });
            destinations.push(self.eval_account(&branch.destination)?);
        }

        let amounts = split(&total.amount, &shares, self.remainder_rule())?;
        self.check_funds(&allocation.source, &source, &total)?;
        debug!(%source, %total, branches = amounts.len(), "allocate");

        for (destination, amount) in destinations.iter().zip(&amounts) {
            self.ctx.transfer(&source, destination, &total.asset, amount);
        }
        Ok(())
    }

    fn exec_if(&mut self, conditional: &Conditional) -> EvalResult<()> {
        if self.eval_bool(&conditional.condition)? {
            self.exec_statements(&conditional.then_branch.statements)
        } else if let Some(else_branch) = &conditional.else_branch {
            self.exec_statements(&else_branch.statements)
        } else {
            Ok(())
        }
    }

    /// A monetary amount that may be moved: never negative.
    fn eval_transfer_amount(&self, expr: &Expr) -> EvalResult<Monetary> {
        let amount = self.eval_monetary(expr)?;
        if amount.amount.is_negative() {
            return Err(EvalError::negative_amount().at(expr.range));
        }
        Ok(amount)
    }

    /// Fail unless `account` can give `amount` without going below its floor.
    fn check_funds(&self, source: &Source, account: &str, amount: &Monetary) -> EvalResult<()> {
        let Some(floor) = self.overdraft_floor(source, account, &amount.asset)? else {
            return Ok(());
        };
        let available = self.ctx.balance(account, &amount.asset) - floor;
        if available < amount.amount {
            debug!(%account, %amount, %available, "insufficient funds");
            return Err(EvalError::new(EvalErrorKind::InsufficientFunds {
                account: account.to_string(),
                asset: amount.asset.clone(),
                needed: amount.amount.clone(),
                available,
            })
            .at(source.range));
        }
        Ok(())
    }

    /// The lowest balance `account` may reach, or `None` when unbounded.
    fn overdraft_floor(
        &self,
        source: &Source,
        account: &str,
        asset: &str,
    ) -> EvalResult<Option<BigInt>> {
        if self.is_enabled(FeatureFlag::RelaxedOverdraft) {
            return Ok(None);
        }
        match &source.overdraft {
            Some(Overdraft::Unbounded) => Ok(None),
            Some(Overdraft::UpTo(bound)) => {
                let bound_value = self.eval_transfer_amount(bound)?;
                if bound_value.asset != asset {
                    return Err(
                        EvalError::mismatched_assets(asset, &bound_value.asset).at(bound.range)
                    );
                }
                Ok(Some(-bound_value.amount))
            }
            None if account == WORLD => Ok(None),
            None => Ok(Some(BigInt::zero())),
        }
    }
}
