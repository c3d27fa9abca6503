use super::span::Span;

/// A single physical line of a document snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of the line, excluding the terminating `\n`.
    pub span: Span,
    /// The line text without its terminator.
    pub text: String,
}

impl Line {
    /// Byte offset of the first character of this line.
    pub fn from(&self) -> usize {
        self.span.start
    }

    /// Byte offset just past the last character of this line.
    pub fn to(&self) -> usize {
        self.span.end
    }
}

/// Splits `text` into lines with their byte spans.
///
/// Splits on `\n` only. A trailing newline produces a final empty line and the
/// empty string produces a single empty line, so every offset in `0..=len`
/// belongs to exactly one line.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = Line> + '_ {
    let mut offset = 0usize;
    text.split('\n').enumerate().map(move |(idx, raw)| {
        let start = offset;
        let end = start + raw.len();
        // +1 for the '\n' consumed by split
        offset = end + 1;
        Line {
            number: idx + 1,
            span: Span { start, end },
            text: raw.to_string(),
        }
    })
}
