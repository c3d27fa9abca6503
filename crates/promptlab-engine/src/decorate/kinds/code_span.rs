use crate::text::Span;

use super::Split;

/// Inline code span with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Splits an inline-code node's `range` whose source text is `slice`.
    ///
    /// Valid when the slice opens and closes with backtick runs of equal
    /// length N that do not overlap; each marker is N bytes.
    pub fn split(slice: &str, range: Span) -> Split {
        let b = slice.as_bytes();
        let open = b.iter().take_while(|&&c| c == Self::TICK).count();
        let close = b.iter().rev().take_while(|&&c| c == Self::TICK).count();
        if open > 0 && open == close && b.len() >= 2 * open {
            Split::delimited(range, open)
        } else {
            Split::ContentOnly(range)
        }
    }
}
