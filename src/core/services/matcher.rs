//! Filename selection by include/exclude patterns
//!
//! The matcher is decoupled from where filenames come from: hand it any
//! zero-argument provider (all tracked files, staged files, a fixed list in a
//! test) and it narrows that list by a [`PatternPair`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use crate::core::models::PatternPair;
use crate::core::ports::WorkingDir;
use crate::core::services::cache::CwdCache;
use crate::error::Result;

/// Resolves the directory candidate paths are relative to from the working directory
pub type BaseFn = fn(&Path) -> Result<PathBuf>;

/// Narrows a provider's filenames, memoized per working directory
pub struct FileMatcher<F, B = BaseFn> {
    provider: F,
    base: B,
    cache: CwdCache<(String, String), BTreeSet<String>>,
}

impl<F, B> std::fmt::Debug for FileMatcher<F, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileMatcher").field("cache", &self.cache).finish_non_exhaustive()
    }
}

#[allow(clippy::unnecessary_wraps)]
fn working_dir(cwd: &Path) -> Result<PathBuf> {
    Ok(cwd.to_path_buf())
}

/// Build a matcher over `provider`
pub fn build_matcher<F>(provider: F, workdir: Arc<dyn WorkingDir>) -> FileMatcher<F>
where
    F: Fn() -> Result<Vec<String>>,
{
    FileMatcher::new(provider, workdir)
}

impl<F> FileMatcher<F>
where
    F: Fn() -> Result<Vec<String>>,
{
    /// Create a matcher; existence checks are made relative to `workdir`
    #[must_use]
    pub fn new(provider: F, workdir: Arc<dyn WorkingDir>) -> Self {
        Self {
            provider,
            base: working_dir,
            cache: CwdCache::new(workdir),
        }
    }
}

impl<F, B> FileMatcher<F, B>
where
    F: Fn() -> Result<Vec<String>>,
    B: Fn(&Path) -> Result<PathBuf>,
{
    /// Check existence relative to the directory `base` derives from the
    /// working directory instead of the working directory itself
    ///
    /// Results stay memoized per working directory.
    #[must_use]
    pub fn with_base<B2>(self, base: B2) -> FileMatcher<F, B2>
    where
        B2: Fn(&Path) -> Result<PathBuf>,
    {
        FileMatcher {
            provider: self.provider,
            base,
            cache: self.cache,
        }
    }

    /// Turn memoization on or off
    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = self.cache.enabled(enabled);
        self
    }

    /// Filenames that search-match `include`, do not search-match `exclude`,
    /// and are present on disk
    ///
    /// Presence uses `symlink_metadata`, so a symlink with a missing target
    /// still counts.
    pub fn matching(&self, include: &str, exclude: &str) -> Result<BTreeSet<String>> {
        let patterns = PatternPair::new(include, exclude)?;
        self.cache.get_or_try_insert_with((include.to_string(), exclude.to_string()), |cwd| {
            let base = (self.base)(cwd)?;
            let candidates = (self.provider)()?;
            let total = candidates.len();
            let matched: BTreeSet<String> = candidates
                .into_iter()
                .filter(|name| patterns.matches(name))
                .filter(|name| base.join(name).symlink_metadata().is_ok())
                .collect();
            debug!(
                "matched {} of {total} file(s) for include={include:?} exclude={exclude:?}",
                matched.len()
            );
            Ok(matched)
        })
    }

    /// Forget memoized results
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
