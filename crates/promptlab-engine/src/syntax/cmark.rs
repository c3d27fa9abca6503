use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

use super::{
    MarkdownParser,
    line_index::LineIndex,
    types::{NodeKind, Position, SyntaxNode},
};

/// [`MarkdownParser`] backed by pulldown-cmark's offset iterator.
///
/// Start/end events are folded into a tree; byte ranges are converted to
/// points through a [`LineIndex`] after trailing line terminators are trimmed.
#[derive(Debug, Clone, Copy)]
pub struct CmarkParser {
    options: Options,
}

impl CmarkParser {
    pub fn new() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CmarkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser for CmarkParser {
    fn parse(&self, text: &str) -> SyntaxNode {
        let index = LineIndex::new(text);
        let position = |range: Range<usize>| position_for(text, &index, range);

        let mut stack = vec![SyntaxNode::new(NodeKind::Root, Some(position(0..text.len())))];

        for (event, range) in Parser::new_ext(text, self.options).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    stack.push(SyntaxNode::new(kind_for(&tag), Some(position(range))));
                }
                Event::End(_) => {
                    // Root is never popped; a stray End would indicate a parser bug
                    if stack.len() > 1
                        && let Some(node) = stack.pop()
                        && let Some(parent) = stack.last_mut()
                    {
                        parent.children.push(node);
                    }
                }
                Event::Code(_) => {
                    if let Some(parent) = stack.last_mut() {
                        parent
                            .children
                            .push(SyntaxNode::new(NodeKind::InlineCode, Some(position(range))));
                    }
                }
                _ => {}
            }
        }

        // Fold anything left open (unbalanced input) back into the root
        while stack.len() > 1 {
            if let Some(node) = stack.pop()
                && let Some(parent) = stack.last_mut()
            {
                parent.children.push(node);
            }
        }

        stack.pop().unwrap_or_else(|| SyntaxNode::new(NodeKind::Root, None))
    }
}

fn kind_for(tag: &Tag<'_>) -> NodeKind {
    match tag {
        Tag::Heading { level, .. } => NodeKind::Heading {
            depth: heading_depth(*level),
        },
        Tag::List(start) => NodeKind::List {
            ordered: start.is_some(),
        },
        Tag::Item => NodeKind::ListItem,
        Tag::BlockQuote(_) => NodeKind::Blockquote,
        Tag::CodeBlock(_) => NodeKind::Code,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        _ => NodeKind::Other,
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn position_for(text: &str, index: &LineIndex, range: Range<usize>) -> Position {
    let bytes = text.as_bytes();
    let mut end = range.end.min(bytes.len());
    while end > range.start && matches!(bytes[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    Position {
        start: index.point(range.start),
        end: index.point(end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::types::Point;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> SyntaxNode {
        CmarkParser::new().parse(text)
    }

    fn find_all(node: &SyntaxNode, pred: &dyn Fn(&NodeKind) -> bool) -> Vec<SyntaxNode> {
        let mut out = Vec::new();
        if pred(&node.kind) {
            out.push(node.clone());
        }
        for child in &node.children {
            out.extend(find_all(child, pred));
        }
        out
    }

    #[test]
    fn heading_position_excludes_newline() {
        let root = parse("# Title\n");
        let headings = find_all(&root, &|k| matches!(k, NodeKind::Heading { .. }));
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].kind, NodeKind::Heading { depth: 1 });
        let pos = headings[0].position.unwrap();
        assert_eq!(pos.start, Point::new(1, 1));
        assert_eq!(pos.end, Point::new(1, 8));
    }

    #[test]
    fn strong_nested_in_paragraph() {
        let root = parse("**bold**");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind, NodeKind::Other);
        let strong = &root.children[0].children[0];
        assert_eq!(strong.kind, NodeKind::Strong);
        let pos = strong.position.unwrap();
        assert_eq!(pos.start, Point::new(1, 1));
        assert_eq!(pos.end, Point::new(1, 9));
    }

    #[test]
    fn inline_code_is_a_leaf() {
        let root = parse("run `ls` now");
        let codes = find_all(&root, &|k| matches!(k, NodeKind::InlineCode));
        assert_eq!(codes.len(), 1);
        let pos = codes[0].position.unwrap();
        assert_eq!(pos.start, Point::new(1, 5));
        assert_eq!(pos.end, Point::new(1, 9));
        assert!(codes[0].children.is_empty());
    }

    #[test]
    fn list_ordering_flag() {
        let root = parse("1. one\n2. two\n");
        assert_eq!(root.children[0].kind, NodeKind::List { ordered: true });
        let items: Vec<_> = root.children[0]
            .children
            .iter()
            .map(|item| item.start_line())
            .collect();
        assert_eq!(items, vec![Some(1), Some(2)]);

        let root = parse("- a\n- b\n");
        assert_eq!(root.children[0].kind, NodeKind::List { ordered: false });
    }

    #[test]
    fn blockquote_spans_lines() {
        let root = parse("> quoted\n> still quoted\n");
        let quote = &root.children[0];
        assert_eq!(quote.kind, NodeKind::Blockquote);
        assert_eq!(quote.start_line(), Some(1));
        assert_eq!(quote.end_line(), Some(2));
    }

    #[test]
    fn fenced_code_spans_fences() {
        let root = parse("```\ncode\n```\n");
        let code = &root.children[0];
        assert_eq!(code.kind, NodeKind::Code);
        assert_eq!(code.start_line(), Some(1));
        assert_eq!(code.end_line(), Some(3));
    }

    #[test]
    fn empty_document_is_bare_root() {
        let root = parse("");
        assert_eq!(root.kind, NodeKind::Root);
        assert!(root.children.is_empty());
    }
}
