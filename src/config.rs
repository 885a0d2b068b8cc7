//! User configuration
//!
//! Stored at `~/.config/gitprobe/config.toml` (XDG standard), or wherever
//! `$GITPROBE_CONFIG` points. Every field has a default, so a missing file
//! is the same as an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GITPROBE_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// How git is invoked
    #[serde(default)]
    pub git: GitSettings,
    /// Memoization settings
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Git executable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitSettings {
    /// Executable name (looked up on `PATH`) or absolute path
    #[serde(default = "default_binary")]
    pub binary: String,
}

fn default_binary() -> String {
    "git".to_string()
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Memoize answers per working directory
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl ProbeConfig {
    /// Get the config file path
    ///
    /// `$GITPROBE_CONFIG` wins; otherwise the platform config directory.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("gitprobe").join("config.toml")))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
