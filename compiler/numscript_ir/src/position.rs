//! Line/character positions.
//!
//! Every position handed to diagnostics consumers is a 0-based line and a
//! 0-based character offset counted in Unicode scalar values (code points)
//! from the start of the line. The lexer, parser, analyzer and renderer all
//! go through [`LineIndex`] so the unit is applied uniformly.

use std::fmt;

use crate::Span;

/// A (line, character) pair, ordered line-major.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

impl fmt::Display for Position {
    /// Human-facing form: 1-based line and column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Half-open `[start, end)` source range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Whether `position` falls inside this range.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }
}

/// Pre-computed line start table for offset to position conversion.
///
/// Lookups binary-search the line, then count code points from the line
/// start to the offset.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset of each line start; `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Number of lines in the source (an empty source has one line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 0-based line containing the byte `offset`.
    #[inline]
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX)
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to
    /// the end of the document.
    pub fn position(&self, offset: u32) -> Position {
        let offset = (offset as usize).min(self.source.len());
        let line = self.line_of(u32::try_from(offset).unwrap_or(u32::MAX));
        let line_start = self.line_starts[line as usize] as usize;
        let character = match self.source.get(line_start..offset) {
            Some(prefix) => prefix.chars().count(),
            // Offset inside a multi-byte character: count whole chars before it.
            None => self.source[line_start..]
                .char_indices()
                .take_while(|(i, _)| line_start + i < offset)
                .count(),
        };
        Position::new(line, u32::try_from(character).unwrap_or(u32::MAX))
    }

    /// Convert a byte span to a range.
    pub fn range(&self, span: Span) -> Range {
        Range::new(self.position(span.start), self.position(span.end))
    }

    /// Text of a 0-based line without its line terminator.
    pub fn line_text(&self, line: u32) -> Option<&'src str> {
        let start = *self.line_starts.get(line as usize)? as usize;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map_or(self.source.len(), |next| *next as usize);
        let text = &self.source[start..end];
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
