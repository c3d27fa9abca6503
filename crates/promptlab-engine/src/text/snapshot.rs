use xi_rope::Rope;

use super::{
    lines::{Line, lines_with_spans},
    span::Span,
};

/// Immutable view of the document text at one revision.
///
/// The host editing surface owns and versions snapshots; the decoration
/// engine only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSnapshot {
    text: String,
    lines: Vec<Line>,
}

impl DocSnapshot {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = lines_with_spans(&text).collect();
        Self { text, lines }
    }

    /// Builds a snapshot from the current contents of a rope buffer.
    pub fn from_rope(rope: &Rope) -> Self {
        Self::new(rope.to_string())
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Document length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines; never zero.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the 1-based line `number`, or `None` when out of range.
    pub fn line(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|idx| self.lines.get(idx))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Text covered by `span`; `None` when out of bounds or not on a char boundary.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.text.get(span.start..span.end)
    }
}
