//! Merge conflict detection
//!
//! Three signals are reconciled:
//!
//! - marker files (`MERGE_HEAD`, `CHERRY_PICK_HEAD`, `REVERT_HEAD`) say an
//!   operation is open, nothing more
//! - index entries at stage 2 or 3 say a path is unresolved
//! - the `Conflicts:` block of `MERGE_MSG` names the paths git reported as
//!   conflicting when the operation stopped
//!
//! Submodules are handled by re-running the same queries with the submodule's
//! checkout as the root. Any failing query is returned as an error; a tree is
//! never reported clean because a submodule could not be inspected.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use super::Git;
use super::root::git_dir;
use crate::core::models::{ConflictState, IndexEntry, PendingOperation};
use crate::core::services::{parse_merge_msg_for_conflicts, zsplit_lossy};
use crate::error::{Error, Result};

const MERGE_MSG: &str = "MERGE_MSG";

/// Operation left open in the git directory of `root`, if any
pub fn pending_operation(git: &Git, root: &Path) -> Result<Option<PendingOperation>> {
    let dir = git_dir(git, root)?;
    Ok(PendingOperation::ALL.into_iter().find(|op| dir.join(op.marker_file()).exists()))
}

/// Paths in the index of `root` carrying stage 2 or 3
pub fn unmerged_paths(git: &Git, root: &Path) -> Result<BTreeSet<String>> {
    Ok(index_entries(git, root, "--unmerged")?
        .into_iter()
        .filter(IndexEntry::is_conflict_side)
        .map(|entry| entry.path)
        .collect())
}

/// Initialized submodules of `root`, as paths relative to it
///
/// A submodule counts once its checkout holds a `.git` file or directory.
pub fn submodules(git: &Git, root: &Path) -> Result<BTreeSet<String>> {
    Ok(index_entries(git, root, "--stage")?
        .into_iter()
        .filter(IndexEntry::is_gitlink)
        .map(|entry| entry.path)
        .filter(|path| root.join(path).join(".git").exists())
        .collect())
}

/// Clean or conflicted, descending into submodules depth-first
pub fn conflict_state(git: &Git, root: &Path) -> Result<ConflictState> {
    if !unmerged_paths(git, root)?.is_empty() {
        return Ok(ConflictState::Conflicted);
    }

    for sub in submodules(git, root)? {
        if conflict_state(git, &root.join(&sub))?.is_conflicted() {
            debug!("submodule {sub} is conflicted");
            return Ok(ConflictState::Conflicted);
        }
    }

    Ok(ConflictState::Clean)
}

/// Every conflicted path, relative to `root`
///
/// The union of the merge message listing, the unresolved index entries and
/// the conflicted files of each conflicted submodule.
pub fn conflicted_files(git: &Git, root: &Path) -> Result<BTreeSet<String>> {
    info!("Checking merge-conflict files only.");

    let mut files: BTreeSet<String> = merge_msg_conflicts(git, root)?.into_iter().collect();
    files.extend(unmerged_paths(git, root)?);

    for sub in submodules(git, root)? {
        let sub_root = root.join(&sub);
        if !conflict_state(git, &sub_root)?.is_conflicted() {
            continue;
        }
        let nested = conflicted_files(git, &sub_root)?;
        debug!("{} conflicted file(s) in submodule {sub}", nested.len());
        files.extend(nested.into_iter().map(|path| format!("{sub}/{path}")));
    }

    Ok(files)
}

/// Paths listed under `Conflicts:` in `MERGE_MSG`; none when the file is absent
fn merge_msg_conflicts(git: &Git, root: &Path) -> Result<Vec<String>> {
    let path = git_dir(git, root)?.join(MERGE_MSG);
    match fs::read(&path) {
        Ok(msg) => Ok(parse_merge_msg_for_conflicts(&msg)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(Error::Io { path, source }),
    }
}

fn index_entries(git: &Git, root: &Path, mode: &str) -> Result<Vec<IndexEntry>> {
    let stdout = git.checked(root, &["ls-files", "-z", mode])?;
    Ok(zsplit_lossy(&stdout)
        .iter()
        .filter_map(|record| {
            let entry = IndexEntry::parse(record);
            if entry.is_none() {
                debug!("skipping unexpected index record {record:?}");
            }
            entry
        })
        .collect())
}
