//! Syntax tree for Numscript programs.
//!
//! The tree is immutable once built and every node carries the [`Range`] it
//! was parsed from, so both the analyzer and the interpreter can point
//! diagnostics and runtime errors back at the source.

use num_bigint::BigInt;

use crate::{Range, Type};

/// A whole script: statements in document order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub range: Range,
}

impl Program {
    /// Variable declarations in document order.
    pub fn declarations(&self) -> impl Iterator<Item = &VarDecl> {
        self.statements.iter().filter_map(|stmt| match &stmt.kind {
            StatementKind::VarDecl(decl) => Some(decl),
            _ => None,
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Statement {
    pub kind: StatementKind,
    pub range: Range,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StatementKind {
    /// `send <amount> from <source> to <destination>`
    Send(Send),
    /// `set_tx_meta("key", <value>)`
    SetTxMeta { key: StringLit, value: Expr },
    /// `set_account_meta(<account>, "key", <value>)`
    SetAccountMeta {
        account: Expr,
        key: StringLit,
        value: Expr,
    },
    /// `allocate <amount> from <source> { <branches> }`
    Allocate(Allocation),
    /// `if <cond> { .. } else { .. }`
    If(Conditional),
    /// One entry of a `vars { .. }` block.
    VarDecl(VarDecl),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Send {
    pub amount: Expr,
    pub source: Source,
    pub destination: Expr,
}

/// A debited account together with its overdraft permission.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Source {
    pub account: Expr,
    pub overdraft: Option<Overdraft>,
    pub range: Range,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Overdraft {
    /// `allowing unbounded overdraft`
    Unbounded,
    /// `allowing overdraft up to <monetary>`
    UpTo(Expr),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Allocation {
    pub amount: Expr,
    pub source: Source,
    pub branches: Vec<AllocationBranch>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AllocationBranch {
    pub portion: BranchPortion,
    pub destination: Expr,
    pub range: Range,
}

impl AllocationBranch {
    /// Whether this branch receives whatever the other branches leave over.
    pub fn keeps_remainder(&self) -> bool {
        matches!(self.portion, BranchPortion::Remaining { .. })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BranchPortion {
    /// An explicit share: a portion literal or a portion-typed expression.
    Share(Expr),
    /// `remaining`
    Remaining { range: Range },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Conditional {
    pub condition: Expr,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub range: Range,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VarDecl {
    pub name: Ident,
    pub ty: TypeAnnotation,
    pub default: Option<Expr>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Ident {
    pub name: String,
    pub range: Range,
}

/// A type keyword as written; `ty` is `None` for unknown names.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeAnnotation {
    pub name: String,
    pub ty: Option<Type>,
    pub range: Range,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StringLit {
    pub value: String,
    pub range: Range,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub range: Range,
}

impl Expr {
    pub fn new(kind: ExprKind, range: Range) -> Self {
        Expr { kind, range }
    }

    /// The account name if this is an account literal.
    pub fn as_account_literal(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Account(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// `[USD/2 100]`
    Monetary { asset: String, amount: BigInt },
    /// `@users:001`, stored without the `@`.
    Account(String),
    /// `USD/2`
    Asset(String),
    String(String),
    Number(BigInt),
    /// `1/3` or `12.5%` (stored as `125/1000`); not reduced.
    Portion {
        numerator: BigInt,
        denominator: BigInt,
    },
    Bool(bool),
    /// `$name`, stored without the `$`.
    Variable(String),
    /// `balance(<account>, <asset>)`
    Balance {
        account: Box<Expr>,
        asset: Box<Expr>,
    },
    /// `meta(<account>, <key>)`
    Meta { account: Box<Expr>, key: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Binding power for precedence climbing; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
        }
    }

    pub fn is_comparison(self) -> bool {
        self.precedence() == 3
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Neg,
}

