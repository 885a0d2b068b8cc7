//! gitprobe - Git working-tree introspection for hook runners
//!
//! Answers the questions a pre-commit style pipeline asks before it decides
//! what to run: where the repository root is, which files are tracked, staged
//! or changed between two revisions, and whether a merge, cherry-pick or
//! revert left files in conflict (submodules included).
//!
//! ```no_run
//! use gitprobe::{GitProbe, VersionControl};
//!
//! let probe = GitProbe::current_dir();
//! if probe.is_in_merge_conflict()? {
//!     for file in probe.conflicted_files()? {
//!         println!("{file}");
//!     }
//! }
//! # Ok::<(), gitprobe::Error>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use adapters::{FileSource, FixedDir, Git, GitProbe, ProcessCwd, ProcessRunner};
pub use crate::core::models::{ConflictState, PatternPair, PendingOperation};
pub use crate::core::ports::{CmdOutput, CommandRunner, VersionControl, WorkingDir};
pub use crate::core::services::{FileMatcher, build_matcher, zsplit};
pub use error::{Error, Result};
