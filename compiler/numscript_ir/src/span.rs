//! Byte-offset spans.
//!
//! The lexer slices source text with these. Diagnostics and AST nodes use
//! [`crate::Range`]; [`crate::LineIndex::range`] converts a span into one.

use std::fmt;

/// A byte offset that does not fit in `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    StartTooLarge(usize),
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (which, offset) = match self {
            SpanError::StartTooLarge(offset) => ("start", offset),
            SpanError::EndTooLarge(offset) => ("end", offset),
        };
        write!(f, "source offset {offset} ({which}) does not fit in 32 bits")
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end` into a script.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Narrow a lexer byte range, failing past 4 GiB.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Zero-width span, used for the end-of-file token.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
