//! # Document Text
//!
//! Byte spans, line splitting, and the immutable [`DocSnapshot`] the
//! decoration engine reads from.

pub mod lines;
pub mod snapshot;
pub mod span;

pub use lines::{Line, lines_with_spans};
pub use snapshot::DocSnapshot;
pub use span::Span;
