//! The `check` command: static analysis of one script.

use numscript_analysis::check_source;
use numscript_diagnostic::emitter::{ColorMode, TerminalEmitter};
use tracing::debug;

use crate::wire::CheckResponse;
use crate::CliError;

/// Output format of `check`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CheckFormat {
    /// `{"valid": .., "errors": [..]}`
    #[default]
    Json,
    /// Source excerpts with carets.
    Human,
}

/// Analyze `source` and encode the diagnostics as JSON.
pub fn check(source: &str) -> Result<String, CliError> {
    let result = check_source(source);
    debug!(diagnostics = result.diagnostics.len(), "check finished");
    serde_json::to_string(&CheckResponse::from(&result)).map_err(CliError::Output)
}

/// Analyze `source` and render every diagnostic as a source excerpt.
pub fn check_human(source: &str, colors: ColorMode, is_tty: bool) -> Result<String, CliError> {
    let result = check_source(source);
    let mut output = Vec::new();
    TerminalEmitter::with_color_mode(&mut output, source, colors, is_tty)
        .emit_all(&result.diagnostics)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
