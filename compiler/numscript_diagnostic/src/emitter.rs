//! Human-readable diagnostic output.
//!
//! A rendered block shows the message, the 1-based location, the offending
//! source line and a caret run under the offending range:
//!
//! ```text
//! error: expected `to`, found `}`
//!  --> 3:24
//!   |
//! 3 | send [USD 100] from @a }
//!   |                        ^
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use numscript_ir::{LineIndex, Range};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const HINT: &str = "\x1b[1;32m"; // Bold green
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Render one block for `message` located at `range`.
///
/// `label` is the leading word of the header, usually a severity name.
pub fn render_snippet(index: &LineIndex<'_>, label: &str, message: &str, range: Range) -> String {
    render_block(index, label, message, range, None)
}

fn render_block(
    index: &LineIndex<'_>,
    label: &str,
    message: &str,
    range: Range,
    color: Option<&str>,
) -> String {
    let paint = |text: &str, code: &str| match color {
        Some(_) => format!("{code}{text}{}", colors::RESET),
        None => text.to_string(),
    };

    let line_no = (range.start.line + 1).to_string();
    let pad = " ".repeat(line_no.len());
    let gutter = paint("|", colors::GUTTER);
    let mut out = String::new();

    let header = paint(label, color.unwrap_or(""));
    let _ = writeln!(out, "{header}: {message}");
    let _ = writeln!(out, "{pad}{} {}", paint("-->", colors::GUTTER), range.start);

    let Some(text) = index.line_text(range.start.line) else {
        return out;
    };

    let _ = writeln!(out, "{pad} {gutter}");
    let _ = writeln!(out, "{} {gutter} {text}", paint(&line_no, colors::GUTTER));

    // Preserve tabs so the caret lines up with the rendered source.
    let indent: String = text
        .chars()
        .take(range.start.character as usize)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let line_len = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let end_character = if range.end.line == range.start.line {
        range.end.character
    } else {
        line_len
    };
    let width = end_character.saturating_sub(range.start.character).max(1);
    let carets = "^".repeat(width as usize);
    let _ = writeln!(
        out,
        "{pad} {gutter} {indent}{}",
        paint(&carets, color.unwrap_or(""))
    );

    out
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes rendered diagnostic blocks to a terminal or any writer.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    index: LineIndex<'src>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, source: &'src str, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            index: LineIndex::new(source),
        }
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let severity = diagnostic.severity();
        let color = self.colors.then_some(severity_color(severity));
        let block = render_block(
            &self.index,
            severity.as_str(),
            &diagnostic.message(),
            diagnostic.range,
            color,
        );
        writeln!(self.writer, "{block}")
    }

    pub fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic)?;
        }
        self.writer.flush()
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
        Severity::Information => colors::INFO,
        Severity::Hint => colors::HINT,
    }
}

#[cfg(test)]
mod tests;
