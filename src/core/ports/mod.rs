//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the introspection logic and the
//! outside world: the process that runs git, the notion of "current directory",
//! and the version control queries callers consume.
//!
//! Implementations live in the `adapters` module.

mod runner;
mod vcs;
mod workdir;

pub use runner::{CmdOutput, CommandRunner};
pub use vcs::VersionControl;
pub use workdir::WorkingDir;
