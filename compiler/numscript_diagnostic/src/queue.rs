//! Diagnostic queue for collecting and ordering diagnostics.
//!
//! Diagnostics are released sorted by the start of their range. The sort is
//! stable: diagnostics starting at the same position keep the order in which
//! they were pushed, so the order of the producing checks is preserved.

use crate::{Diagnostic, DiagnosticKind, Severity};
use numscript_ir::Range;

/// Queue for collecting and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(range, DiagnosticKind::ZeroAmount);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    pub fn push(&mut self, range: Range, kind: DiagnosticKind) {
        self.add(Diagnostic::new(range, kind));
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity() == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of Error-severity diagnostics collected so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by start position and return them.
    ///
    /// Clears the queue. Skips sorting if already in order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].range.start <= w[1].range.start);

        if !already_sorted {
            // `sort_by_key` is stable: ties keep insertion order.
            self.diagnostics.sort_by_key(|d| d.range.start);
        }

        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.add(diagnostic);
        }
    }
}
