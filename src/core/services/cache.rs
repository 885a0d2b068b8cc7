//! Working-directory memoization
//!
//! Repeated queries against an unchanged tree are common within one run and
//! every answer costs a git process. Results are cached under the working
//! directory they were computed in plus the call arguments, so a probe that
//! is pointed somewhere else never sees another directory's answer.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::core::ports::WorkingDir;
use crate::error::{Error, Result};

/// Cache keyed by `(working directory, arguments)`
pub struct CwdCache<K, V> {
    workdir: Arc<dyn WorkingDir>,
    enabled: bool,
    entries: Mutex<HashMap<(PathBuf, K), V>>,
}

impl<K, V> std::fmt::Debug for CwdCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CwdCache")
            .field("workdir", &self.workdir)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<K, V> CwdCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create an empty cache reading the directory from `workdir`
    #[must_use]
    pub fn new(workdir: Arc<dyn WorkingDir>) -> Self {
        Self {
            workdir,
            enabled: true,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Turn memoization on or off; a disabled cache always recomputes
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The working directory a lookup made now would be keyed under
    pub fn current_dir(&self) -> Result<PathBuf> {
        self.workdir.current().map_err(Error::WorkingDir)
    }

    /// Return the cached value for `key` in the current directory, or compute it
    ///
    /// `compute` receives the directory. Errors are returned and never cached.
    /// The lock is not held while computing; two racing callers may both
    /// compute, and the later insert wins with an identical value.
    pub fn get_or_try_insert_with<F>(&self, key: K, compute: F) -> Result<V>
    where
        F: FnOnce(&Path) -> Result<V>,
    {
        let cwd = self.current_dir()?;
        if !self.enabled {
            return compute(&cwd);
        }

        let key = (cwd, key);
        if let Some(value) = self.lock().get(&key) {
            debug!("cache hit in {}", key.0.display());
            return Ok(value.clone());
        }

        let value = compute(&key.0)?;
        self.lock().insert(key, value.clone());
        Ok(value)
    }

    /// Drop every cached value
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached values
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(PathBuf, K), V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
