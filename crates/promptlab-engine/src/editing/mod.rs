//! # Host Surface Model
//!
//! The editing side the decoration engine plugs into: a rope buffer that
//! reports whether each command changed the document, a field holding the
//! current decoration set, and a session tying them together with explicit
//! hydration and dirty-state flags.
//!
//! ## Edit Loop
//!
//! 1. A [`Cmd`] is applied to the [`EditorBuffer`], yielding a [`Transaction`]
//! 2. If `doc_changed`, the [`DecorationField`] recomputes from a fresh snapshot
//! 3. The session's change listener updates the dirty flag unless hydrating

pub mod buffer;
pub mod field;
pub mod session;

pub use buffer::{Cmd, EditError, EditorBuffer, Transaction};
pub use field::DecorationField;
pub use session::EditorSession;
