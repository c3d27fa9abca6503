use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

use crate::text::DocSnapshot;

/// Edits the host surface applies to its buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
    /// Replaces the whole document, e.g. when loading a template into the editor.
    ReplaceAll { text: String },
}

/// Outcome of applying a [`Cmd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    /// False when the edited range already held the new text.
    pub doc_changed: bool,
    /// Buffer version after the command.
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("range {start}..{end} out of bounds for document of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// xi-rope backed text buffer owned by the host surface.
#[derive(Clone)]
pub struct EditorBuffer {
    buffer: Rope,
    version: u64,
}

impl EditorBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            version: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Immutable snapshot of the current contents.
    pub fn snapshot(&self) -> DocSnapshot {
        DocSnapshot::from_rope(&self.buffer)
    }

    pub fn insert(&mut self, at: usize, text: &str) -> Result<Transaction, EditError> {
        self.apply(Cmd::InsertText {
            at,
            text: text.to_string(),
        })
    }

    pub fn delete(&mut self, range: Range<usize>) -> Result<Transaction, EditError> {
        self.apply(Cmd::DeleteRange { range })
    }

    pub fn replace_all(&mut self, text: &str) -> Result<Transaction, EditError> {
        self.apply(Cmd::ReplaceAll {
            text: text.to_string(),
        })
    }

    /// Applies `cmd`, bumping the version when the document changes.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Transaction, EditError> {
        let (range, text) = match cmd {
            Cmd::InsertText { at, text } => (at..at, text),
            Cmd::DeleteRange { range } => (range, String::new()),
            Cmd::ReplaceRange { range, text } => (range, text),
            Cmd::ReplaceAll { text } => (0..self.len(), text),
        };
        self.validate(&range)?;

        let doc_changed = self.buffer.slice_to_cow(range.clone()) != text.as_str();
        if doc_changed {
            let delta = self.compile(range, &text);
            self.buffer = delta.apply(&self.buffer);
            self.version += 1;
        }

        Ok(Transaction {
            doc_changed,
            version: self.version,
        })
    }

    fn compile(&self, range: Range<usize>, text: &str) -> Delta<RopeInfo> {
        let mut builder = Builder::new(self.len());
        builder.replace(range, Rope::from(text));
        builder.build()
    }

    fn validate(&self, range: &Range<usize>) -> Result<(), EditError> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(EditError::OutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for offset in [range.start, range.end] {
            if !self.buffer.is_codepoint_boundary(offset) {
                return Err(EditError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("len", &self.len())
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_delete_replace() {
        let mut buf = EditorBuffer::new("hello");
        buf.apply(Cmd::InsertText {
            at: 0,
            text: "# ".to_string(),
        })
        .unwrap();
        assert_eq!(buf.text(), "# hello");

        buf.apply(Cmd::DeleteRange { range: 2..3 }).unwrap();
        assert_eq!(buf.text(), "# ello");

        buf.apply(Cmd::ReplaceRange {
            range: 2..6,
            text: "world".to_string(),
        })
        .unwrap();
        assert_eq!(buf.text(), "# world");
        assert_eq!(buf.version(), 3);
    }

    #[test]
    fn empty_edit_is_not_a_change() {
        let mut buf = EditorBuffer::new("text");
        let tx = buf
            .apply(Cmd::InsertText {
                at: 2,
                text: String::new(),
            })
            .unwrap();
        assert!(!tx.doc_changed);
        assert_eq!(tx.version, 0);
    }

    #[test]
    fn identical_replacement_is_not_a_change() {
        let mut buf = EditorBuffer::new("same text");
        let tx = buf
            .apply(Cmd::ReplaceRange {
                range: 0..4,
                text: "same".to_string(),
            })
            .unwrap();
        assert!(!tx.doc_changed);
        assert!(!buf.replace_all("same text").unwrap().doc_changed);
        assert_eq!(buf.version(), 0);
    }

    #[test]
    fn helpers_route_through_apply() {
        let mut buf = EditorBuffer::new("ab");
        assert!(buf.insert(1, "-").unwrap().doc_changed);
        assert_eq!(buf.text(), "a-b");
        buf.delete(0..1).unwrap();
        assert_eq!(buf.text(), "-b");
        assert_eq!(buf.version(), 2);
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut buf = EditorBuffer::new("old");
        let tx = buf
            .apply(Cmd::ReplaceAll {
                text: "- new".to_string(),
            })
            .unwrap();
        assert!(tx.doc_changed);
        assert_eq!(buf.snapshot().text(), "- new");
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut buf = EditorBuffer::new("abc");
        assert_eq!(
            buf.apply(Cmd::DeleteRange { range: 1..9 }),
            Err(EditError::OutOfBounds {
                start: 1,
                end: 9,
                len: 3
            })
        );
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn boundaries_checked_against_multibyte_text() {
        let mut buf = EditorBuffer::new("a☕b");
        assert_eq!(buf.delete(1..2), Err(EditError::NotCharBoundary(2)));
        assert_eq!(buf.delete(2..4), Err(EditError::NotCharBoundary(2)));
        assert!(buf.delete(1..4).unwrap().doc_changed);
        assert_eq!(buf.text(), "ab");
        assert!(buf.insert(2, "!").is_ok());
        assert_eq!(buf.text(), "ab!");
    }

    #[test]
    fn split_character_is_rejected() {
        let mut buf = EditorBuffer::new("é");
        assert_eq!(
            buf.apply(Cmd::InsertText {
                at: 1,
                text: "x".to_string()
            }),
            Err(EditError::NotCharBoundary(1))
        );
    }
}
