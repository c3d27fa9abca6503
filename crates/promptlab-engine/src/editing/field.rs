use crate::{
    decorate::{DecorationEngine, DecorationSet},
    syntax::MarkdownParser,
    text::DocSnapshot,
};

use super::buffer::Transaction;

/// Holds the decoration set the host renders between recomputes.
///
/// Built synchronously on creation and replaced wholesale on every
/// document-changing transaction.
#[derive(Debug, Clone, Default)]
pub struct DecorationField {
    decorations: DecorationSet,
    recomputes: u64,
}

impl DecorationField {
    /// Initial build at mount time.
    pub fn create<P: MarkdownParser>(engine: &DecorationEngine<P>, snapshot: &DocSnapshot) -> Self {
        Self {
            decorations: engine.recompute(snapshot),
            recomputes: 1,
        }
    }

    /// Recomputes when `tx` changed the document; returns whether it did.
    pub fn update<P: MarkdownParser>(
        &mut self,
        engine: &DecorationEngine<P>,
        tx: &Transaction,
        snapshot: &DocSnapshot,
    ) -> bool {
        if !tx.doc_changed {
            return false;
        }
        self.decorations = engine.recompute(snapshot);
        self.recomputes += 1;
        true
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Number of full recomputes performed, including the initial build.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
