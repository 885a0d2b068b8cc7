//! Introspection services
//!
//! Logic that sits between raw git output and the answers callers want.
//! Parsing is pure; the matcher and the cache only consult the working
//! directory they are handed.
//!
//! - [`zsplit`] - Split NUL-delimited git output
//! - [`merge_msg`] - Read the `Conflicts:` block of a merge message
//! - [`cache`] - Memoize results per working directory
//! - [`matcher`] - Select filenames by include/exclude patterns

pub mod cache;
pub mod matcher;
pub mod merge_msg;
pub mod zsplit;

pub use cache::CwdCache;
pub use matcher::{FileMatcher, build_matcher};
pub use merge_msg::parse_merge_msg_for_conflicts;
pub use zsplit::{zsplit, zsplit_lossy};
