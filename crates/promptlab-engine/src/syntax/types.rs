/// A 1-based `(line, column)` source location reported by the parser.
///
/// Columns count bytes from the start of the line, so `column - 1` is the
/// byte distance from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source extent of a node. `end` points one past the node's last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

/// The node kinds the decoration engine distinguishes.
///
/// Everything else the parser produces (paragraphs, links, tables, ...) is
/// reported as [`NodeKind::Other`] and only traversed for its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Heading {
        /// ATX/setext level, 1 through 6.
        depth: u8,
    },
    List {
        ordered: bool,
    },
    ListItem,
    Blockquote,
    Strong,
    Emphasis,
    InlineCode,
    /// Fenced or indented code block.
    Code,
    Other,
}

/// A node of the parsed markdown tree. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub position: Option<Position>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, position: Option<Position>) -> Self {
        Self {
            kind,
            position,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// Line the node starts on, if the parser attributed a position.
    pub fn start_line(&self) -> Option<usize> {
        self.position.map(|p| p.start.line)
    }

    /// Line the node ends on, if the parser attributed a position.
    pub fn end_line(&self) -> Option<usize> {
        self.position.map(|p| p.end.line)
    }
}
