use crate::{
    decorate::{DecorationEngine, DecorationOptions, DecorationSet},
    syntax::{CmarkParser, MarkdownParser},
    text::DocSnapshot,
};

use super::{
    buffer::{Cmd, EditError, EditorBuffer, Transaction},
    field::DecorationField,
};

/// One open prompt-template editor: buffer, decorations and edit-state flags.
///
/// ## Flag ownership
///
/// - `hydrating` is written only by [`EditorSession::hydrate`], which sets it
///   while programmatically loading text and clears it afterwards.
/// - `dirty` is written only by the change listener
///   ([`EditorSession::on_transaction`]) and reset by [`EditorSession::mark_clean`].
///
/// Loading a template therefore never marks the session dirty; user edits do.
#[derive(Debug)]
pub struct EditorSession<P = CmarkParser> {
    buffer: EditorBuffer,
    engine: DecorationEngine<P>,
    field: DecorationField,
    hydrating: bool,
    dirty: bool,
}

impl EditorSession<CmarkParser> {
    pub fn new(text: &str, options: DecorationOptions) -> Self {
        Self::with_engine(DecorationEngine::new(options), text)
    }
}

impl<P: MarkdownParser> EditorSession<P> {
    /// Mounts an editor over `text`, building the initial decorations synchronously.
    pub fn with_engine(engine: DecorationEngine<P>, text: &str) -> Self {
        let buffer = EditorBuffer::new(text);
        let field = DecorationField::create(&engine, &buffer.snapshot());
        Self {
            buffer,
            engine,
            field,
            hydrating: false,
            dirty: false,
        }
    }

    /// Loads `text` into the editor without marking the session dirty.
    ///
    /// Returns `Ok(false)` when the editor already holds exactly `text`.
    pub fn hydrate(&mut self, text: &str) -> Result<bool, EditError> {
        if self.buffer.text() == text {
            return Ok(false);
        }
        self.hydrating = true;
        let result = self.dispatch(Cmd::ReplaceAll {
            text: text.to_string(),
        });
        self.hydrating = false;
        result.map(|tx| tx.doc_changed)
    }

    /// Applies a user edit.
    pub fn edit(&mut self, cmd: Cmd) -> Result<Transaction, EditError> {
        self.dispatch(cmd)
    }

    fn dispatch(&mut self, cmd: Cmd) -> Result<Transaction, EditError> {
        let tx = self.buffer.apply(cmd)?;
        if tx.doc_changed {
            let snapshot = self.buffer.snapshot();
            self.field.update(&self.engine, &tx, &snapshot);
        }
        self.on_transaction(&tx);
        Ok(tx)
    }

    /// Change listener: a document change outside hydration marks the session dirty.
    pub fn on_transaction(&mut self, tx: &Transaction) {
        if !tx.doc_changed || self.hydrating {
            return;
        }
        if !self.dirty {
            log::debug!("editor session dirty at version {}", tx.version);
        }
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_hydrating(&self) -> bool {
        self.hydrating
    }

    /// Clears the dirty flag, e.g. after the template was saved.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Current editor text.
    pub fn value(&self) -> String {
        self.buffer.text()
    }

    pub fn snapshot(&self) -> DocSnapshot {
        self.buffer.snapshot()
    }

    pub fn decorations(&self) -> &DecorationSet {
        self.field.decorations()
    }

    pub fn recomputes(&self) -> u64 {
        self.field.recomputes()
    }
}
