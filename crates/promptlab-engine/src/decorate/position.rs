//! Maps parser `(line, column)` points onto absolute byte offsets of a snapshot.

use crate::{
    syntax::{Point, Position},
    text::{DocSnapshot, Span},
};

/// Converts a 1-based point into a byte offset within `snapshot`.
///
/// Returns `None` for an absent point or a line outside `1..=line_count`.
/// Columns below 1 are treated as 1, and the result never leaves the
/// physical line it names.
pub fn map_point(snapshot: &DocSnapshot, point: Option<Point>) -> Option<usize> {
    let point = point?;
    let line = snapshot.line(point.line)?;
    let column = point.column.max(1);
    let offset = line.from().saturating_add(column - 1);
    Some(offset.clamp(line.from(), line.to()))
}

/// Maps both ends of `position`; `None` if either fails or the range is empty or inverted.
pub fn map_range(snapshot: &DocSnapshot, position: Option<Position>) -> Option<Span> {
    let position = position?;
    let from = map_point(snapshot, Some(position.start))?;
    let to = map_point(snapshot, Some(position.end))?;
    (to > from).then_some(Span { start: from, end: to })
}
