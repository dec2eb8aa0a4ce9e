use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_position_ordering_is_line_major() {
    assert!(Position::new(0, 50) < Position::new(1, 0));
    assert!(Position::new(2, 3) < Position::new(2, 4));
    assert_eq!(Position::new(1, 1), Position::new(1, 1));
}

#[test]
fn test_position_display_is_one_based() {
    assert_eq!(Position::new(0, 0).to_string(), "1:1");
    assert_eq!(Position::new(4, 9).to_string(), "5:10");
}

#[test]
fn test_line_index_basic() {
    let source = "line1\nline2\nline3";
    let index = LineIndex::new(source);

    assert_eq!(index.line_count(), 3);
    assert_eq!(index.position(0), Position::new(0, 0));
    assert_eq!(index.position(6), Position::new(1, 0));
    assert_eq!(index.position(8), Position::new(1, 2));
    assert_eq!(index.position(12), Position::new(2, 0));
}

#[test]
fn test_line_index_counts_code_points() {
    // 'é' is two bytes, '€' is three bytes.
    let source = "é€x";
    let index = LineIndex::new(source);
    assert_eq!(index.position(2), Position::new(0, 1));
    assert_eq!(index.position(5), Position::new(0, 2));
    assert_eq!(index.position(6), Position::new(0, 3));
}

#[test]
fn test_line_index_clamps_past_end() {
    let index = LineIndex::new("ab\ncd");
    assert_eq!(index.position(100), Position::new(1, 2));
}

#[test]
fn test_line_index_range() {
    let index = LineIndex::new("send\n  [USD 1]");
    let range = index.range(Span::new(7, 14));
    assert_eq!(range.start, Position::new(1, 2));
    assert_eq!(range.end, Position::new(1, 9));
}

#[test]
fn test_line_text_strips_terminators() {
    let index = LineIndex::new("first\r\nsecond\n");
    assert_eq!(index.line_text(0), Some("first"));
    assert_eq!(index.line_text(1), Some("second"));
    assert_eq!(index.line_text(2), Some(""));
    assert_eq!(index.line_text(3), None);
}

#[test]
fn test_range_cover_and_contains() {
    let a = Range::new(Position::new(0, 2), Position::new(0, 5));
    let b = Range::new(Position::new(1, 0), Position::new(1, 3));
    let covered = a.cover(b);
    assert_eq!(covered.start, Position::new(0, 2));
    assert_eq!(covered.end, Position::new(1, 3));
    assert!(covered.contains(Position::new(0, 9)));
    assert!(!covered.contains(Position::new(1, 3)));
}
