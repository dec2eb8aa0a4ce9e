//! Statement walk and usage-site checks.

use num_traits::Zero;
use numscript_diagnostic::{BranchSide, DiagnosticKind};
use numscript_ir::{
    Allocation, Block, BranchPortion, Conditional, Expr, ExprKind, Overdraft, Range, Send,
    Source, Statement, StatementKind, Type, VarDecl,
};
use numscript_stack::ensure_sufficient_stack;

use super::Checker;

impl Checker {
    pub(super) fn check_statement(&mut self, stmt: &Statement) {
        ensure_sufficient_stack(|| self.check_statement_kind(stmt));
    }

    fn check_statement_kind(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Send(send) => self.check_send(send, stmt.range),
            StatementKind::Allocate(allocation) => self.check_allocate(allocation, stmt.range),
            StatementKind::SetTxMeta { value, .. } => {
                self.infer(value);
            }
            StatementKind::SetAccountMeta { account, value, .. } => {
                self.expect_type(account, Type::Account);
                self.infer(value);
            }
            StatementKind::If(conditional) => self.check_conditional(conditional),
            StatementKind::VarDecl(decl) => {
                self.check_default(decl);
                self.declare_visible(decl);
            }
        }
    }

    fn check_send(&mut self, send: &Send, range: Range) {
        if is_same_literal_account(&send.source.account, &send.destination) {
            self.report(range, DiagnosticKind::SelfTransfer);
        }
        self.check_amount(&send.amount);
        self.check_source(&send.source);
        self.expect_type(&send.destination, Type::Account);
    }

    fn check_allocate(&mut self, allocation: &Allocation, range: Range) {
        self.check_allocation_shape(allocation, range);
        self.check_amount(&allocation.amount);
        self.check_source(&allocation.source);

        for branch in &allocation.branches {
            if let BranchPortion::Share(share) = &branch.portion {
                self.expect_type(share, Type::Portion);
            }
            if is_same_literal_account(&allocation.source.account, &branch.destination) {
                self.report(branch.range, DiagnosticKind::SelfTransfer);
            }
            self.expect_type(&branch.destination, Type::Account);
        }
    }

    fn check_amount(&mut self, amount: &Expr) {
        if let ExprKind::Monetary { amount: value, .. } = &amount.kind {
            if value.is_zero() {
                self.report(amount.range, DiagnosticKind::ZeroAmount);
            }
        }
        self.expect_type(amount, Type::Monetary);
    }

    fn check_source(&mut self, source: &Source) {
        self.expect_type(&source.account, Type::Account);
        if let Some(Overdraft::UpTo(bound)) = &source.overdraft {
            self.expect_type(bound, Type::Monetary);
        }
    }

    fn check_conditional(&mut self, conditional: &Conditional) {
        self.expect_type(&conditional.condition, Type::Bool);

        if let ExprKind::Bool(value) = conditional.condition.kind {
            let dead = if value {
                conditional.else_branch.as_ref().map(|b| (BranchSide::Else, b.range))
            } else {
                Some((BranchSide::Then, conditional.then_branch.range))
            };
            if let Some((branch, range)) = dead {
                self.report(
                    range,
                    DiagnosticKind::UnreachableBranch {
                        branch,
                        condition: value,
                    },
                );
            }
        }

        self.check_block(&conditional.then_branch);
        if let Some(else_branch) = &conditional.else_branch {
            self.check_block(else_branch);
        }
    }

    fn check_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.check_statement(stmt);
        }
    }

    /// Make the first declaration of a name usable by later statements.
    fn declare_visible(&mut self, decl: &VarDecl) {
        if let Some(info) = self.variables.get_mut(&decl.name.name) {
            if info.range == decl.name.range {
                info.visible = true;
            }
        }
    }

    /// A default must match the declared type, except that `meta(..)` may
    /// initialize any type: its string is coerced at run time.
    fn check_default(&mut self, decl: &VarDecl) {
        let Some(default) = &decl.default else {
            return;
        };
        match (decl.ty.ty, &default.kind) {
            (_, ExprKind::Meta { .. }) | (None, _) => {
                self.infer(default);
            }
            (Some(ty), _) => self.expect_type(default, ty),
        }
    }
}

fn is_same_literal_account(source: &Expr, destination: &Expr) -> bool {
    matches!(
        (source.as_account_literal(), destination.as_account_literal()),
        (Some(a), Some(b)) if a == b
    )
}
