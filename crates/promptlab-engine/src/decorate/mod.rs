//! # Markdown Decoration Engine
//!
//! Computes the rendering annotations a host text surface applies to show
//! syntax-aware markdown while the user edits raw text.
//!
//! ## Pipeline
//!
//! Every recompute parses the whole snapshot and runs, in order:
//!
//! 1. **Position mapping** (`position`): parser `(line, column)` points to byte offsets
//! 2. **Collection** (`collect`): one traversal grouping nodes by construct
//! 3. **Marker splitting** (`kinds`): delimiters re-validated against the text and
//!    split from content
//! 4. **Synthesis** (`synth`): line decorations, inline marks and heading widgets,
//!    plus a line scan that recovers headings the parser did not position
//! 5. **Commit** (`set`): sort by `(from, side, to)` and freeze into a [`DecorationSet`]
//!
//! There is no incremental diffing; [`DecorationEngine::recompute`] is the only
//! entry point and replaces the previous set wholesale.
//!
//! ## Key Invariants
//!
//! - Set entries never decrease in `from`
//! - Marks are non-empty and inside the document; line decorations and widgets
//!   are zero-width anchors at a line start
//! - A validated inline construct's marker and content ranges tile its source exactly
//! - A line gets at most one decoration per line-level category

pub mod collect;
pub mod kinds;
pub mod position;
pub mod set;
pub mod snapshot;
pub mod synth;
pub mod types;


pub use set::{DecorationSet, DecorationSetBuilder, commit};
pub use types::{ClassNames, Decoration, DecorationKind, DecorationOptions};

use crate::{
    syntax::{CmarkParser, MarkdownParser},
    text::DocSnapshot,
};

use synth::Synthesizer;

/// Parses, collects, splits, synthesizes and commits decorations for a snapshot.
#[derive(Debug, Clone)]
pub struct DecorationEngine<P = CmarkParser> {
    parser: P,
    options: DecorationOptions,
}

impl DecorationEngine<CmarkParser> {
    pub fn new(options: DecorationOptions) -> Self {
        Self::with_parser(CmarkParser::new(), options)
    }
}

impl Default for DecorationEngine<CmarkParser> {
    fn default() -> Self {
        Self::new(DecorationOptions::default())
    }
}

impl<P: MarkdownParser> DecorationEngine<P> {
    pub fn with_parser(parser: P, options: DecorationOptions) -> Self {
        Self { parser, options }
    }

    pub fn options(&self) -> &DecorationOptions {
        &self.options
    }

    /// Builds the complete decoration set for `snapshot`.
    ///
    /// Pure with respect to the snapshot: recomputing an unchanged snapshot
    /// yields an equal set.
    pub fn recompute(&self, snapshot: &DocSnapshot) -> DecorationSet {
        self.recompute_with(&self.parser, snapshot)
    }

    /// Like [`recompute`](Self::recompute) but parses with `parser` instead of
    /// the engine's own.
    pub fn recompute_with<Q: MarkdownParser>(
        &self,
        parser: &Q,
        snapshot: &DocSnapshot,
    ) -> DecorationSet {
        let tree = parser.parse(snapshot.text());
        let collected = collect::collect(snapshot, &tree);
        let pending = Synthesizer::new(snapshot, &self.options).run(&collected);
        let set = commit(pending);
        log::debug!(
            "recomputed {} decorations over {} lines",
            set.len(),
            snapshot.line_count()
        );
        set
    }
}

/// Recomputes with the default parser and options.
pub fn recompute(snapshot: &DocSnapshot) -> DecorationSet {
    DecorationEngine::default().recompute(snapshot)
}
