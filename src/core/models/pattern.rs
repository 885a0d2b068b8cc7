//! Include/exclude pattern pair
//!
//! Both patterns use search semantics: they may match anywhere in the path.
//! The empty pattern matches every path, so `""` includes all and `"^$"`
//! excludes nothing that has a name.

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled include/exclude pair
#[derive(Debug, Clone)]
pub struct PatternPair {
    include: Regex,
    exclude: Regex,
}

impl PatternPair {
    /// Compile both patterns
    pub fn new(include: &str, exclude: &str) -> Result<Self> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Include pattern source
    #[must_use]
    pub fn include(&self) -> &str {
        self.include.as_str()
    }

    /// Exclude pattern source
    #[must_use]
    pub fn exclude(&self) -> &str {
        self.exclude.as_str()
    }

    /// Kept iff the path matches include and does not match exclude
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
