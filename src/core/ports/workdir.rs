//! Working directory port
//!
//! Every query is relative to "the current directory". Injecting it keeps the
//! memo cache keys explicit and lets tests point a probe at a temp repo without
//! touching the process-wide cwd.

use std::io;
use std::path::PathBuf;

/// Supplies the directory queries run in
pub trait WorkingDir: Send + Sync + std::fmt::Debug {
    /// The directory to run git in right now
    fn current(&self) -> io::Result<PathBuf>;
}
