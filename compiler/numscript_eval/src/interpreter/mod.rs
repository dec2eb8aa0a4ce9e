//! Tree-walking interpreter for Numscript programs.
//!
//! # Architecture
//!
//! `Interpreter` holds the run configuration: feature flags, the
//! cancellation token and the optional step limit. Every call to
//! [`Interpreter::run`] builds a fresh `Evaluator` that owns the private
//! `ExecutionContext` and the variable environment of that run. Nothing is
//! shared between runs, so one interpreter can serve many threads.
//!
//! - `binding`: variable declarations and caller values
//! - `exec`: statements
//! - `expr`: expressions

mod binding;
mod exec;
mod expr;

use numscript_ir::{Program, Statement};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::allocation::RemainderRule;
use crate::cancel::CancellationToken;
use crate::context::ExecutionContext;
use crate::errors::{EvalError, EvalErrorKind, EvalResult};
use crate::flags::{FeatureFlag, FeatureFlags};
use crate::result::ExecutionResult;
use crate::store::{StaticStore, Variables};
use crate::value::Value;

/// Run configuration.
///
/// ```text
/// let interpreter = Interpreter::new()
///     .with_flags(FeatureFlags::from_names(["experimental-relaxed-overdraft"]))
///     .with_step_limit(10_000);
/// let result = interpreter.run(&program, &variables, &store)?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    flags: FeatureFlags,
    cancel: CancellationToken,
    step_limit: Option<u64>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Abort once more than `limit` statements have started.
    #[must_use]
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    /// Execute `program` against a copy of `store`.
    ///
    /// Either every statement succeeds and the complete result is returned,
    /// or the first failure is returned and nothing else.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn run(
        &self,
        program: &Program,
        variables: &Variables,
        store: &StaticStore,
    ) -> EvalResult<ExecutionResult> {
        let mut evaluator = Evaluator {
            interpreter: self,
            variables,
            ctx: ExecutionContext::from_store(store),
            env: FxHashMap::default(),
        };
        evaluator.report_undeclared(program);
        evaluator.bind_all(program)?;
        evaluator.exec_statements(&program.statements)?;

        let result = evaluator.ctx.into_result();
        debug!(postings = result.postings.len(), "run succeeded");
        Ok(result)
    }
}

/// State of one run.
struct Evaluator<'a> {
    interpreter: &'a Interpreter,
    variables: &'a Variables,
    ctx: ExecutionContext,
    env: FxHashMap<String, Value>,
}

impl Evaluator<'_> {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.interpreter.flags.is_enabled(flag)
    }

    fn remainder_rule(&self) -> RemainderRule {
        if self.is_enabled(FeatureFlag::AllocationRoundRobin) {
            RemainderRule::RoundRobin
        } else {
            RemainderRule::KeeperOrLast
        }
    }

    /// Runs before every statement, nested ones included.
    fn before_statement(&mut self, stmt: &Statement) -> EvalResult<()> {
        if self.interpreter.cancel.is_cancelled() {
            debug!("run cancelled");
            return Err(EvalError::new(EvalErrorKind::Cancelled).at(stmt.range));
        }
        let steps = self.ctx.count_step();
        if let Some(limit) = self.interpreter.step_limit {
            if steps > limit {
                let error = EvalError::new(EvalErrorKind::StepLimitExceeded { limit });
                return Err(error.at(stmt.range));
            }
        }
        Ok(())
    }
}
