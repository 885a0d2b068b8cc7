//! Adapter implementations for port traits
//!
//! This module contains the concrete implementations that do I/O:
//!
//! - `process` - Running commands with `std::process`, process working directory
//! - `git/` - Git queries: root, file listings, conflict detection

pub mod git;
pub mod process;

pub use git::{FileSource, Git, GitProbe};
pub use process::{FixedDir, ProcessCwd, ProcessRunner};
