//! Version control system port
//!
//! The questions a hook pipeline asks before deciding what to run.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::models::{ConflictState, PendingOperation};
use crate::error::Result;

/// Version control introspection
///
/// Implementations answer relative to their working directory.
pub trait VersionControl: Send + Sync {
    /// Top-level directory of the enclosing working tree
    fn root(&self) -> Result<PathBuf>;

    /// Every tracked file, in the order git lists them
    fn all_files(&self) -> Result<Vec<String>>;

    /// Files staged for commit, excluding deletions
    fn staged_files(&self) -> Result<Vec<String>>;

    /// Files changed on `target` since it diverged from `base`, excluding deletions
    fn changed_files(&self, base: &str, target: &str) -> Result<Vec<String>>;

    /// Clean or conflicted, including submodules
    fn conflict_state(&self) -> Result<ConflictState>;

    /// Whether any path is still unresolved
    fn is_in_merge_conflict(&self) -> Result<bool> {
        Ok(self.conflict_state()?.is_conflicted())
    }

    /// Paths still in conflict, re-rooted from submodules
    fn conflicted_files(&self) -> Result<BTreeSet<String>>;

    /// Merge, cherry-pick or revert that has not been concluded
    fn pending_operation(&self) -> Result<Option<PendingOperation>>;
}
