#![allow(clippy::unwrap_used)]

use super::*;
use crate::DiagnosticKind;
use numscript_ir::Position;
use pretty_assertions::assert_eq;

#[test]
fn test_render_snippet_points_at_column() {
    let source = "send [USD 100] from @a }";
    let index = LineIndex::new(source);
    let range = Range::new(Position::new(0, 23), Position::new(0, 24));

    let rendered = render_snippet(&index, "error", "expected `to`", range);
    let expected = [
        "error: expected `to`",
        " --> 1:24",
        "  |",
        "1 | send [USD 100] from @a }",
        &format!("  | {}^", " ".repeat(23)),
        "",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_snippet_underlines_whole_range() {
    let source = "vars {\n  money $x\n}";
    let index = LineIndex::new(source);
    let range = Range::new(Position::new(1, 2), Position::new(1, 7));

    let rendered = render_snippet(&index, "error", "unknown type `money`", range);
    assert!(rendered.contains("2 |   money $x"));
    assert!(rendered.contains("  |   ^^^^^\n"));
}

#[test]
fn test_render_snippet_keeps_tabs() {
    let source = "\tsend x";
    let index = LineIndex::new(source);
    let range = Range::new(Position::new(0, 6), Position::new(0, 7));

    let rendered = render_snippet(&index, "error", "bad", range);
    assert!(rendered.ends_with("| \t     ^\n"));
}

#[test]
fn test_terminal_emitter_no_color() {
    let source = "send [USD 0] from @a to @b";
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, source, ColorMode::Never, true);

    let diag = Diagnostic::new(
        Range::new(Position::new(0, 5), Position::new(0, 12)),
        DiagnosticKind::ZeroAmount,
    );
    emitter.emit_all(&[diag]).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("hint: this amount is zero"));
    assert!(text.contains("^^^^^^^"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let source = "send";
    let mut output = Vec::new();
    let mut emitter =
        TerminalEmitter::with_color_mode(&mut output, source, ColorMode::Always, false);

    let diag = Diagnostic::new(
        Range::new(Position::new(0, 0), Position::new(0, 4)),
        DiagnosticKind::Parsing {
            message: "unexpected end of file".to_string(),
        },
    );
    emitter.emit(&diag).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b[1;31merror"));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
