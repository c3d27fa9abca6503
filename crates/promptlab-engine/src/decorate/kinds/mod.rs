//! Delimiter knowledge for each decorated construct.
//!
//! Each kind owns the syntax of its markers and re-validates them against the
//! actual text, since the parser only delimits the node as a whole. Line-level
//! kinds return spans relative to the line start; inline kinds split an
//! absolute range into marker and content sub-ranges.

pub mod block_quote;
pub mod code_fence;
pub mod code_span;
pub mod emphasis;
pub mod heading;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use heading::AtxHeading;
pub use list_item::{ListItemMarker, ListMarker};

use crate::text::Span;

/// Result of splitting an inline range into delimiters and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// The delimiters validated. `content` is `None` when nothing sits between them.
    Delimited {
        open: Span,
        close: Span,
        content: Option<Span>,
    },
    /// The delimiters did not validate; the whole range is styled as content.
    ContentOnly(Span),
}

impl Split {
    /// Splits `range` with `marker_len` delimiter bytes at each end.
    ///
    /// Callers guarantee `range.len() >= 2 * marker_len`.
    pub(crate) fn delimited(range: Span, marker_len: usize) -> Self {
        let open = Span::new(range.start, range.start + marker_len);
        let close = Span::new(range.end - marker_len, range.end);
        let content = Span::new(open.end, close.start);
        Split::Delimited {
            open,
            close,
            content: (!content.is_empty()).then_some(content),
        }
    }

    /// Marker sub-ranges in offset order.
    pub fn markers(&self) -> Vec<Span> {
        match self {
            Split::Delimited { open, close, .. } => vec![*open, *close],
            Split::ContentOnly(_) => vec![],
        }
    }

    /// Content sub-range, if any.
    pub fn content(&self) -> Option<Span> {
        match self {
            Split::Delimited { content, .. } => *content,
            Split::ContentOnly(span) => Some(*span),
        }
    }
}
