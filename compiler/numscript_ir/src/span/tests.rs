use super::*;

#[test]
fn test_span_slices_source() {
    let source = "send [USD 1]";
    assert_eq!(&source[Span::new(5, 12).to_range()], "[USD 1]");
    assert_eq!(&source[Span::point(4).to_range()], "");
}

#[test]
fn test_span_rejects_offsets_past_u32() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));

    let past = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(past..past),
        Err(SpanError::StartTooLarge(past))
    );
    assert_eq!(
        Span::try_from_range(0..past),
        Err(SpanError::EndTooLarge(past))
    );
    assert_eq!(
        SpanError::EndTooLarge(past).to_string(),
        format!("source offset {past} (end) does not fit in 32 bits")
    );
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(7, 14)), "7..14");
    assert_eq!(Span::default(), Span::point(0));
}
