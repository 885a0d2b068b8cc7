//! Git integration adapter
//!
//! Implements [`VersionControl`] by running the git executable.
//!
//! - [`root`] - Repository root and git directory
//! - [`files`] - Tracked, staged and changed file listings
//! - [`conflict`] - Merge conflict state and conflicted files

pub mod conflict;
pub mod files;
pub mod root;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::config::ProbeConfig;
use crate::core::models::{ConflictState, PendingOperation};
use crate::core::ports::{CmdOutput, CommandRunner, VersionControl, WorkingDir};
use crate::core::services::{CwdCache, FileMatcher};
use crate::error::{Error, Result};

use super::process::{FixedDir, ProcessCwd, ProcessRunner};

/// The git executable plus the runner that launches it
#[derive(Debug, Clone)]
pub struct Git {
    binary: String,
    runner: Arc<dyn CommandRunner>,
}

impl Git {
    /// Run `binary` through `runner`
    #[must_use]
    pub fn new(binary: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    /// The executable name or path
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run git and return whatever it produced, whatever the exit code
    ///
    /// Only a failure to launch is an error. Callers that expect non-zero
    /// exits inspect [`CmdOutput::code`] themselves.
    pub fn output(&self, cwd: &Path, args: &[&str]) -> Result<CmdOutput> {
        debug!("running `{}` in {}", self.command_line(args), cwd.display());
        self.runner.run(cwd, &self.binary, args).map_err(|source| Error::Spawn {
            command: self.command_line(args),
            source,
        })
    }

    /// Run git and return stdout, failing on any non-zero exit
    pub fn checked(&self, cwd: &Path, args: &[&str]) -> Result<Vec<u8>> {
        let out = self.output(cwd, args)?;
        if out.success() {
            Ok(out.stdout)
        } else {
            Err(Error::CommandFailed {
                command: self.command_line(args),
                code: out.code,
                stderr: out.stderr_text(),
            })
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.binary.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git", Arc::new(ProcessRunner))
    }
}

/// Where [`GitProbe::matcher`] takes its candidate filenames from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FileSource {
    /// Every tracked file
    #[default]
    All,
    /// Files staged for commit
    Staged,
}

/// Git-based introspection, memoized per working directory
///
/// Every query resolves the repository root from the directory its
/// [`WorkingDir`] reports at call time, and listings are relative to that
/// root. Conflict queries are recomputed on every call; root and file
/// listings are cached per working directory until [`GitProbe::clear_cache`]
/// unless caching is disabled.
#[derive(Debug)]
pub struct GitProbe {
    git: Git,
    workdir: Arc<dyn WorkingDir>,
    cache_enabled: bool,
    roots: CwdCache<(), PathBuf>,
    all: CwdCache<(), Vec<String>>,
    staged: CwdCache<(), Vec<String>>,
    changed: CwdCache<(String, String), Vec<String>>,
}

impl GitProbe {
    /// Probe with `git` from `PATH`, relative to `workdir`
    #[must_use]
    pub fn new(workdir: Arc<dyn WorkingDir>) -> Self {
        Self::with_git(Git::default(), workdir)
    }

    /// Probe relative to the process working directory at each call
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(Arc::new(ProcessCwd))
    }

    /// Probe pinned to `path`
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FixedDir::new(path)))
    }

    /// Probe using an explicit [`Git`]
    #[must_use]
    pub fn with_git(git: Git, workdir: Arc<dyn WorkingDir>) -> Self {
        Self {
            git,
            roots: CwdCache::new(workdir.clone()),
            all: CwdCache::new(workdir.clone()),
            staged: CwdCache::new(workdir.clone()),
            changed: CwdCache::new(workdir.clone()),
            workdir,
            cache_enabled: true,
        }
    }

    /// Probe configured from `config`
    #[must_use]
    pub fn from_config(config: &ProbeConfig, workdir: Arc<dyn WorkingDir>) -> Self {
        Self::with_git(Git::new(config.git.binary.clone(), Arc::new(ProcessRunner)), workdir)
            .with_cache(config.cache.enabled)
    }

    /// Turn memoization on or off
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self.roots = self.roots.enabled(enabled);
        self.all = self.all.enabled(enabled);
        self.staged = self.staged.enabled(enabled);
        self.changed = self.changed.enabled(enabled);
        self
    }

    /// The git wrapper queries go through
    #[must_use]
    pub const fn git(&self) -> &Git {
        &self.git
    }

    /// Absolute git directory of the current working tree
    pub fn git_dir(&self) -> Result<PathBuf> {
        root::git_dir(&self.git, &self.root()?)
    }

    /// A [`FileMatcher`] over this probe's tracked or staged files
    ///
    /// Candidates are root-relative, so presence is checked against the root.
    pub fn matcher(
        &self,
        source: FileSource,
    ) -> FileMatcher<impl Fn() -> Result<Vec<String>> + '_, impl Fn(&Path) -> Result<PathBuf> + '_>
    {
        let provider = move || match source {
            FileSource::All => self.all_files(),
            FileSource::Staged => self.staged_files(),
        };
        FileMatcher::new(provider, self.workdir.clone())
            .with_base(|_: &Path| self.root())
            .with_cache(self.cache_enabled)
    }

    /// Forget every memoized answer
    pub fn clear_cache(&self) {
        self.roots.clear();
        self.all.clear();
        self.staged.clear();
        self.changed.clear();
    }
}

impl Default for GitProbe {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl VersionControl for GitProbe {
    fn root(&self) -> Result<PathBuf> {
        self.roots.get_or_try_insert_with((), |cwd| root::resolve_root(&self.git, cwd))
    }

    fn all_files(&self) -> Result<Vec<String>> {
        self.all.get_or_try_insert_with((), |_| files::all_files(&self.git, &self.root()?))
    }

    fn staged_files(&self) -> Result<Vec<String>> {
        self.staged.get_or_try_insert_with((), |_| files::staged_files(&self.git, &self.root()?))
    }

    fn changed_files(&self, base: &str, target: &str) -> Result<Vec<String>> {
        self.changed.get_or_try_insert_with((base.to_string(), target.to_string()), |_| {
            files::changed_files(&self.git, &self.root()?, base, target)
        })
    }

    fn conflict_state(&self) -> Result<ConflictState> {
        conflict::conflict_state(&self.git, &self.root()?)
    }

    fn conflicted_files(&self) -> Result<BTreeSet<String>> {
        conflict::conflicted_files(&self.git, &self.root()?)
    }

    fn pending_operation(&self) -> Result<Option<PendingOperation>> {
        conflict::pending_operation(&self.git, &self.root()?)
    }
}
