//! Single depth-first pass that groups syntax nodes by construct.

use crate::{
    syntax::{NodeKind, SyntaxNode},
    text::{DocSnapshot, Span},
};

use super::position::map_range;

/// A list item's starting line and the ordering of its enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemRecord {
    pub line: usize,
    pub ordered: bool,
}

/// Inclusive 1-based line range of a block construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start_line: usize,
    pub end_line: usize,
}

/// Nodes of interest grouped by category, in document order.
#[derive(Debug, Default)]
pub struct Collected<'a> {
    pub headings: Vec<&'a SyntaxNode>,
    pub list_items: Vec<ListItemRecord>,
    pub blockquotes: Vec<LineSpan>,
    pub code_blocks: Vec<LineSpan>,
    pub strong: Vec<Span>,
    pub emphasis: Vec<Span>,
    pub inline_code: Vec<Span>,
}

/// Walks `root` once, children in document order.
///
/// A list's `ordered` flag reaches the items below it; nested lists carry
/// their own flag. Inline nodes whose position does not map onto the
/// snapshot are dropped.
pub fn collect<'a>(snapshot: &DocSnapshot, root: &'a SyntaxNode) -> Collected<'a> {
    let mut out = Collected::default();
    walk(snapshot, root, false, &mut out);
    out
}

fn walk<'a>(snapshot: &DocSnapshot, node: &'a SyntaxNode, ordered: bool, out: &mut Collected<'a>) {
    match node.kind {
        NodeKind::List { ordered } => {
            for child in &node.children {
                walk(snapshot, child, ordered, out);
            }
            return;
        }
        NodeKind::Heading { .. } => out.headings.push(node),
        NodeKind::ListItem => match node.start_line() {
            Some(line) => out.list_items.push(ListItemRecord { line, ordered }),
            None => log::trace!("list item without position skipped"),
        },
        NodeKind::Blockquote => {
            if let Some(span) = line_span(node) {
                out.blockquotes.push(span);
            }
        }
        NodeKind::Code => {
            if let Some(span) = line_span(node) {
                out.code_blocks.push(span);
            }
        }
        NodeKind::Strong => push_range(snapshot, node, &mut out.strong),
        NodeKind::Emphasis => push_range(snapshot, node, &mut out.emphasis),
        NodeKind::InlineCode => push_range(snapshot, node, &mut out.inline_code),
        NodeKind::Root | NodeKind::Other => {}
    }

    for child in &node.children {
        walk(snapshot, child, ordered, out);
    }
}

fn line_span(node: &SyntaxNode) -> Option<LineSpan> {
    match (node.start_line(), node.end_line()) {
        (Some(start_line), Some(end_line)) if start_line >= 1 && end_line >= 1 => Some(LineSpan {
            start_line,
            end_line,
        }),
        _ => {
            log::trace!("{:?} node without usable line span skipped", node.kind);
            None
        }
    }
}

fn push_range(snapshot: &DocSnapshot, node: &SyntaxNode, into: &mut Vec<Span>) {
    match map_range(snapshot, node.position) {
        Some(span) => into.push(span),
        None => log::trace!("{:?} node without resolvable range skipped", node.kind),
    }
}
