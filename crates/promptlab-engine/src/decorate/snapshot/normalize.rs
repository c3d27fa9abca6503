use serde::Serialize;

use crate::{
    decorate::{
        set::DecorationSet,
        types::{Decoration, DecorationKind},
    },
    text::DocSnapshot,
};

/// Snapshot of a decoration set for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub decorations: Vec<DecorationSnap>,
}

/// Snapshot of a single decoration.
#[derive(Debug, Serialize)]
pub struct DecorationSnap {
    /// `line`, `mark` or `widget`.
    pub kind: &'static str,
    /// 1-based line containing `from`.
    pub line: usize,
    pub from: usize,
    pub to: usize,
    pub class: String,
    /// Substituted display text for list markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Converts a decoration set into a serializable snapshot, in set order.
pub fn normalize(snapshot: &DocSnapshot, set: &DecorationSet) -> Snap {
    let decorations = set
        .iter()
        .map(|d| DecorationSnap {
            kind: kind_label(d),
            line: line_of(snapshot, d.from),
            from: d.from,
            to: d.to,
            class: d.class().to_string(),
            display: match &d.kind {
                DecorationKind::Mark { marker_text, .. } => marker_text.clone(),
                _ => None,
            },
        })
        .collect();

    Snap { decorations }
}

fn kind_label(d: &Decoration) -> &'static str {
    match d.kind {
        DecorationKind::Line { .. } => "line",
        DecorationKind::Mark { .. } => "mark",
        DecorationKind::Widget { .. } => "widget",
    }
}

fn line_of(snapshot: &DocSnapshot, offset: usize) -> usize {
    let idx = snapshot
        .lines()
        .partition_point(|line| line.from() <= offset);
    idx.max(1)
}
