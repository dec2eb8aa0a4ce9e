//! Parse error type.

use std::fmt;

use numscript_diagnostic::{emitter::render_snippet, Diagnostic, DiagnosticKind};
use numscript_ir::{LineIndex, Range};

/// A syntax error with the range it was detected at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub range: Range,
    pub message: String,
}

impl ParseError {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        ParseError {
            range,
            message: message.into(),
        }
    }

    /// Render as a block with the offending line and a caret under it.
    pub fn render(&self, index: &LineIndex<'_>) -> String {
        render_snippet(index, "error", &self.message, self.range)
    }

    /// Convert to an Error-severity `Parsing` diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(
            self.range,
            DiagnosticKind::Parsing {
                message: self.message.clone(),
            },
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.range.start, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Render every error against `source`, separated by blank lines.
pub fn parse_errors_to_string(errors: &[ParseError], source: &str) -> String {
    let index = LineIndex::new(source);
    errors
        .iter()
        .map(|error| error.render(&index))
        .collect::<Vec<_>>()
        .join("\n")
}
