//! Process-backed adapters
//!
//! The real [`CommandRunner`] and the two [`WorkingDir`] flavours: the
//! process cwd at call time, or a directory fixed up front.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::core::ports::{CmdOutput, CommandRunner, WorkingDir};

/// Runs commands with [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> io::Result<CmdOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()?;

        Ok(CmdOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// The process working directory, read on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCwd;

impl WorkingDir for ProcessCwd {
    fn current(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// A directory chosen up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDir(PathBuf);

impl FixedDir {
    /// Always answer `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The fixed directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl WorkingDir for FixedDir {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}
