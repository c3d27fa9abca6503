//! Ordering and commit of emitted decorations.

use super::types::{Decoration, DecorationKind};

/// The ordered decoration collection handed to the host surface.
///
/// Entries are sorted by `from`, then side, then `to`. A set is rebuilt from
/// scratch on every recompute and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Line decorations, in set order.
    pub fn lines(&self) -> impl Iterator<Item = &Decoration> {
        self.iter()
            .filter(|d| matches!(d.kind, DecorationKind::Line { .. }))
    }

    /// Inline marks, in set order.
    pub fn marks(&self) -> impl Iterator<Item = &Decoration> {
        self.iter()
            .filter(|d| matches!(d.kind, DecorationKind::Mark { .. }))
    }

    /// Block widgets, in set order.
    pub fn widgets(&self) -> impl Iterator<Item = &Decoration> {
        self.iter()
            .filter(|d| matches!(d.kind, DecorationKind::Widget { .. }))
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulates decorations in order and freezes them into a [`DecorationSet`].
#[derive(Debug, Default)]
pub struct DecorationSetBuilder {
    decorations: Vec<Decoration>,
}

impl DecorationSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `decoration`.
    ///
    /// # Panics
    /// Panics if `decoration` starts before the previous one (by `from`, then
    /// side). Callers sort first; an out-of-order add is a bug.
    pub fn add(&mut self, decoration: Decoration) {
        if let Some(last) = self.decorations.last() {
            assert!(
                (decoration.from, decoration.side()) >= (last.from, last.side()),
                "decorations must be added sorted by from and side: {:?} after {:?}",
                decoration,
                last
            );
        }
        self.decorations.push(decoration);
    }

    pub fn finish(self) -> DecorationSet {
        DecorationSet {
            decorations: self.decorations,
        }
    }
}

/// Sorts `pending` by `(from, side, to)` and commits it in one pass.
///
/// The sort is stable, so decorations with equal keys keep emission order.
pub fn commit(mut pending: Vec<Decoration>) -> DecorationSet {
    pending.sort_by(|a, b| {
        a.from
            .cmp(&b.from)
            .then(a.side().cmp(&b.side()))
            .then(a.to.cmp(&b.to))
    });

    let mut builder = DecorationSetBuilder::new();
    for decoration in pending {
        builder.add(decoration);
    }
    builder.finish()
}
