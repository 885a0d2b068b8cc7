//! Domain models for git introspection
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ConflictState`] - Whether a working tree has unresolved conflicts
//! - [`PendingOperation`] - Merge, cherry-pick or revert left open in the git dir
//! - [`IndexEntry`] - One staged entry as listed by `git ls-files --stage`
//! - [`PatternPair`] - Include/exclude regular expressions for file selection

mod conflict;
mod index;
mod pattern;

pub use conflict::{ConflictState, PendingOperation};
pub use index::{GITLINK_MODE, IndexEntry};
pub use pattern::PatternPair;
