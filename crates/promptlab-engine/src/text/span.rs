/// A byte range `[start, end)` into the document text.
///
/// Decorations and split marker/content ranges are all expressed as spans so
/// slicing the snapshot with any of them reproduces the exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts both ends by `offset`, turning a line-relative span absolute.
    #[must_use]
    pub fn offset_by(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_of_regular_span() {
        assert_eq!(Span::new(2, 6).len(), 4);
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = Span::new(6, 2);
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }

    #[test]
    fn offset_by_shifts_both_ends() {
        assert_eq!(Span::new(0, 1).offset_by(10), Span::new(10, 11));
    }
}
