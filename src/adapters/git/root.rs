//! Repository root and git directory resolution

use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use log::debug;

use super::Git;
use crate::error::{Error, Result};

/// Top-level directory of the working tree containing `cwd`
///
/// Fails with [`Error::NotARepository`] outside a working tree, including
/// inside a bare repository.
pub fn resolve_root(git: &Git, cwd: &Path) -> Result<PathBuf> {
    let out = git.output(cwd, &["rev-parse", "--show-toplevel"])?;
    if !out.success() {
        return Err(Error::NotARepository {
            message: out.stderr_text(),
        });
    }

    let stdout = String::from_utf8_lossy(&out.stdout);
    let raw = stdout.trim_end_matches(['\r', '\n']);
    if raw.is_empty() {
        // Older git prints nothing inside a bare repository
        return Err(Error::NotARepository {
            message: format!("{} has no working tree", cwd.display()),
        });
    }

    let root = normalize_root(raw);
    debug!("repository root for {} is {}", cwd.display(), root.display());
    Ok(root)
}

/// Absolute path of the git directory for the working tree at `root`
///
/// For submodules and linked worktrees this is the directory git actually
/// keeps state in, not `<root>/.git`.
pub fn git_dir(git: &Git, root: &Path) -> Result<PathBuf> {
    let stdout = git.checked(root, &["rev-parse", "--git-dir"])?;
    let text = String::from_utf8_lossy(&stdout);
    let dir = PathBuf::from(text.trim_end_matches(['\r', '\n']));
    Ok(if dir.is_absolute() { dir } else { root.join(dir) })
}

/// Strip trailing separators and use the host's separator
fn normalize_root(raw: &str) -> PathBuf {
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return PathBuf::from(MAIN_SEPARATOR_STR);
    }
    if cfg!(windows) {
        let native = trimmed.replace('/', "\\");
        // Keep `C:` as the drive root `C:\`
        if native.ends_with(':') {
            return PathBuf::from(format!("{native}\\"));
        }
        PathBuf::from(native)
    } else {
        PathBuf::from(trimmed)
    }
}
