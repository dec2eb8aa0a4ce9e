//! Diagnostic system for Numscript.
//!
//! - `DiagnosticKind`: the closed set of statically reportable problems,
//!   each with a fixed `Severity` and message
//! - `DiagnosticQueue`: collects diagnostics and releases them ordered by
//!   source position
//! - `emitter`: renders a diagnostic as a source excerpt with a caret

mod diagnostic;
pub mod emitter;
pub mod queue;

pub use diagnostic::{BranchSide, Diagnostic, DiagnosticKind, Severity};
pub use queue::DiagnosticQueue;
