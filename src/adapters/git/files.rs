//! File enumeration
//!
//! All listings use `-z` and go through [`zsplit_lossy`], so paths are never
//! split on whitespace or mangled by git's quoting of unusual bytes. Every
//! listing runs at the repository root, so paths are root-relative whichever
//! directory the caller is in.

use std::path::Path;

use log::debug;

use super::Git;
use crate::core::services::zsplit_lossy;
use crate::error::Result;

/// Added, copied, modified, renamed and type-changed paths.
///
/// Deleted, unmerged, unknown and broken pairs are left out so nothing that is
/// gone from the comparison point is reported.
pub const DIFF_FILTER: &str = "--diff-filter=ACMRT";

/// Every tracked file in the working tree at `root`, in git's listing order
pub fn all_files(git: &Git, root: &Path) -> Result<Vec<String>> {
    let stdout = git.checked(root, &["ls-files", "-z"])?;
    let files = zsplit_lossy(&stdout);
    debug!("{} tracked file(s)", files.len());
    Ok(files)
}

/// Files staged for commit, relative to the repository root
pub fn staged_files(git: &Git, root: &Path) -> Result<Vec<String>> {
    let stdout = git.checked(
        root,
        &["diff", "--staged", "--name-only", "--no-ext-diff", "-z", DIFF_FILTER],
    )?;
    let files = zsplit_lossy(&stdout);
    debug!("{} staged file(s)", files.len());
    Ok(files)
}

/// Files changed on `target` since its merge base with `base`
///
/// Uses the symmetric `base...target` form, so commits that exist only on
/// `base` contribute nothing.
pub fn changed_files(git: &Git, root: &Path, base: &str, target: &str) -> Result<Vec<String>> {
    let range = format!("{base}...{target}");
    let stdout = git.checked(
        root,
        &["diff", "--name-only", "--no-ext-diff", "-z", DIFF_FILTER, &range, "--"],
    )?;
    let files = zsplit_lossy(&stdout);
    debug!("{} file(s) changed in {range}", files.len());
    Ok(files)
}
