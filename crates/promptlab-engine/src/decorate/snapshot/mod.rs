//! Serializable views and invariant checks over decoration sets.
//!
//! Used by snapshot tests and by the CLI's decoration dump.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{DecorationSnap, Snap, normalize};
