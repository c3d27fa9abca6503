pub mod decorate;
pub mod editing;
pub mod syntax;
pub mod template;
pub mod text;

// Re-export key types for easier usage
pub use decorate::{
    ClassNames, Decoration, DecorationEngine, DecorationKind, DecorationOptions, DecorationSet,
    recompute,
};
pub use editing::{Cmd, DecorationField, EditError, EditorBuffer, EditorSession, Transaction};
pub use syntax::{CmarkParser, MarkdownParser, NodeKind, SyntaxNode};
pub use text::{DocSnapshot, Span};
