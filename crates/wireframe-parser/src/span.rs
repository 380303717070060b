//! Byte ranges into the document source.

use std::ops::Range;

/// A half-open byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Returns the span covering the byte at the given line and column of
    /// `source`.
    ///
    /// Lines and columns are 1-based. Positions past the end of a line or of
    /// the source are clamped, and a position at the very end of the source
    /// yields an empty span there.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let line_len = source[line_start..]
            .find('\n')
            .unwrap_or(source.len() - line_start);

        let mut start = line_start + column.saturating_sub(1).min(line_len);
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());

        Self::new(start..end)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(3..8);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 3..8);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let span = Span::new(5..2);
        assert!(span.is_empty());
        assert_eq!(span.start(), 5);
    }

    #[test]
    fn test_at_line_column_first_line() {
        let span = Span::at_line_column("{\"a\": 1}", 1, 3);
        assert_eq!(span.range(), 2..3);
    }

    #[test]
    fn test_at_line_column_later_line() {
        let source = "{\n  \"a\": x\n}";
        let span = Span::at_line_column(source, 2, 8);
        assert_eq!(&source[span.range()], "x");
    }

    #[test]
    fn test_at_line_column_end_of_source() {
        let source = "{\n";
        let span = Span::at_line_column(source, 2, 0);
        assert_eq!(span.range(), 2..2);
    }

    #[test]
    fn test_at_line_column_multibyte() {
        let source = "\"é\" x";
        let span = Span::at_line_column(source, 1, 3);
        assert_eq!(&source[span.range()], "é");
    }
}
