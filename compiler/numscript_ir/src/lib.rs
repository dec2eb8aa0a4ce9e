//! Numscript IR - shared data structures for the Numscript toolchain.
//!
//! - `Span`: byte offsets used by the lexer
//! - `Position` / `Range` / `LineIndex`: line and code-point positions used
//!   everywhere a location is reported
//! - `Token` / `TokenKind` / `TokenList`: lexer output
//! - `ast`: the syntax tree consumed by the analyzer and the interpreter
//! - `Type`: declared variable types

pub mod ast;
mod position;
mod span;
mod token;
mod types;

pub use ast::{
    Allocation, AllocationBranch, BinaryOp, Block, BranchPortion, Conditional, Expr, ExprKind,
    Ident, Overdraft, Program, Send, Source, Statement, StatementKind, StringLit, TypeAnnotation,
    UnaryOp, VarDecl,
};
pub use position::{LineIndex, Position, Range};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use types::Type;
