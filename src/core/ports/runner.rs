//! Command runner port
//!
//! Executes a program with a literal argument vector. No shell is involved, so
//! filenames and refs containing metacharacters are passed through untouched.

use std::io;
use std::path::Path;

/// Captured outcome of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Raw standard output
    pub stdout: Vec<u8>,
    /// Raw standard error
    pub stderr: Vec<u8>,
}

impl CmdOutput {
    /// Whether the process exited with status 0
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Standard error decoded for diagnostics
    #[must_use]
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }
}

/// Runs external commands and captures their output
pub trait CommandRunner: Send + Sync + std::fmt::Debug {
    /// Run `program` with `args` inside `cwd` and wait for it to finish
    ///
    /// A non-zero exit is not an error at this level; only failing to launch
    /// the process is.
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> io::Result<CmdOutput>;
}
