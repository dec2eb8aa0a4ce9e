//! Interpreter for Numscript programs.
//!
//! A run takes a parsed [`Program`], the caller's raw variables, an
//! immutable [`StaticStore`] snapshot and a set of [`FeatureFlags`]. It
//! produces either a complete [`ExecutionResult`] or exactly one
//! [`EvalError`]: a failing run never leaks partial postings or metadata.
//!
//! All quantities are arbitrary precision integers or exact fractions.

mod allocation;
mod cancel;
mod coerce;
mod context;
mod errors;
mod flags;
mod interpreter;
mod operators;
mod result;
mod store;
mod value;

pub use allocation::{split, RemainderRule, Share};
pub use cancel::CancellationToken;
pub use coerce::{coerce, is_valid_account, is_valid_asset};
pub use context::ExecutionContext;
pub use errors::{AllocationError, BindingError, EvalError, EvalErrorKind, EvalResult};
pub use flags::{FeatureFlag, FeatureFlags};
pub use interpreter::Interpreter;
pub use result::{ExecutionResult, Posting};
pub use store::{AccountsMetadata, Balances, StaticStore, Variables};
pub use value::{Monetary, Portion, Value};

use numscript_ir::Program;

/// Run `program` once with the given inputs.
///
/// Shorthand for an [`Interpreter`] built from `cancel` and `flags`.
pub fn run_program(
    cancel: &CancellationToken,
    program: &Program,
    variables: &Variables,
    store: &StaticStore,
    flags: &FeatureFlags,
) -> EvalResult<ExecutionResult> {
    Interpreter::new()
        .with_cancellation(cancel.clone())
        .with_flags(flags.clone())
        .run(program, variables, store)
}
