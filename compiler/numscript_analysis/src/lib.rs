//! Static analysis for Numscript.
//!
//! Reports problems that can be found without runtime data: syntax errors,
//! undeclared or unused variables, type mismatches, inconsistent literal
//! allocations and a few stylistic hints. Diagnostics come back ordered by
//! the start of their range; ties keep the order the checks ran in.

mod checker;

use numscript_diagnostic::{Diagnostic, DiagnosticQueue, Severity};
use numscript_ir::Program;
use tracing::debug;

use checker::Checker;

/// Ordered diagnostics for one document.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    /// Whether any diagnostic has Error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity() == severity)
    }
}

/// Parse and analyze `source`.
///
/// Parse errors become `Parsing` diagnostics; the recovered part of the
/// program is analyzed as well.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_source(source: &str) -> CheckResult {
    let parsed = numscript_parse::parse(source);
    let mut queue = DiagnosticQueue::new();
    queue.extend(parsed.errors.iter().map(numscript_parse::ParseError::to_diagnostic));
    Checker::new(queue).check(&parsed.program)
}

/// Analyze an already parsed program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_program(program: &Program) -> CheckResult {
    Checker::new(DiagnosticQueue::new()).check(program)
}

impl Checker {
    fn check(mut self, program: &Program) -> CheckResult {
        self.check_program(program);
        let diagnostics = self.finish();
        debug!(count = diagnostics.len(), "analysis finished");
        CheckResult { diagnostics }
    }
}

#[cfg(test)]
mod tests;
