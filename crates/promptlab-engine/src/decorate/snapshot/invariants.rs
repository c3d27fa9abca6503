use crate::{
    decorate::{set::DecorationSet, types::DecorationKind},
    text::DocSnapshot,
};

/// Validates decoration set invariants.
///
/// Asserts that:
/// - `from` never decreases in set order
/// - Marks satisfy `0 <= from < to <= len`
/// - Line decorations and widgets are zero-width and anchored at a line start
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(snapshot: &DocSnapshot, set: &DecorationSet) {
    let n = snapshot.len();
    let mut last_from = 0usize;
    for d in set {
        assert!(
            d.from >= last_from,
            "decoration out of order: {:?} after from {}",
            d,
            last_from
        );
        last_from = d.from;

        match d.kind {
            DecorationKind::Mark { .. } => {
                assert!(
                    d.from < d.to && d.to <= n,
                    "mark range invalid: {:?} (doc len: {})",
                    d,
                    n
                );
            }
            DecorationKind::Line { .. } | DecorationKind::Widget { .. } => {
                assert!(
                    d.from == d.to && d.to <= n,
                    "line anchor invalid: {:?} (doc len: {})",
                    d,
                    n
                );
                assert!(
                    snapshot.lines().iter().any(|line| line.from() == d.from),
                    "line anchor not at a line start: {:?}",
                    d
                );
            }
        }
    }
}
