//! # Parser Boundary
//!
//! The decoration engine consumes markdown as a pure function
//! `parse(text) -> SyntaxNode`. [`MarkdownParser`] is that seam;
//! [`CmarkParser`] is the default implementation.
//!
//! Node kinds are a closed sum type ([`NodeKind`]) so the engine dispatches by
//! pattern matching. Positions are 1-based `(line, column)` pairs with byte
//! columns.

pub mod cmark;
pub mod line_index;
pub mod types;

pub use cmark::CmarkParser;
pub use line_index::LineIndex;
pub use types::{NodeKind, Point, Position, SyntaxNode};

/// Parses full document text into a syntax tree.
///
/// Implementations must be pure: the same text always yields the same tree.
pub trait MarkdownParser {
    fn parse(&self, text: &str) -> SyntaxNode;
}

/// Parses `text` with the default [`CmarkParser`].
pub fn parse(text: &str) -> SyntaxNode {
    CmarkParser::new().parse(text)
}
