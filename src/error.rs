//! Error types for git introspection
//!
//! Every failure bubbles up unmodified to the caller. Nothing here is retried:
//! a failed query must never be mistaken for a clean tree.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while querying a working tree
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory is not inside a git working tree
    #[error("not a git repository: {message}")]
    NotARepository {
        /// Raw diagnostic printed by git
        message: String,
    },

    /// A git command exited with a status other than the one required
    #[error(
        "`{command}` failed with exit code {}: {stderr}",
        code.map_or_else(|| "none".to_string(), |c| c.to_string())
    )]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Raw standard error output
        stderr: String,
    },

    /// The git executable could not be launched
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The current working directory could not be determined
    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] io::Error),

    /// Reading git metadata from disk failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An include or exclude pattern is not a valid regular expression
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Whether this error means "not inside a working tree"
    #[must_use]
    pub const fn is_not_a_repository(&self) -> bool {
        matches!(self, Self::NotARepository { .. })
    }
}
