//! Index entries as printed by `git ls-files --stage -z`
//!
//! Each NUL-terminated record has the shape `<mode> <object> <stage>\t<path>`.
//! The path follows the tab verbatim and is never split on whitespace.

/// File mode git uses for submodule (gitlink) entries
pub const GITLINK_MODE: &str = "160000";

/// One entry of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Octal file mode, e.g. `100644`
    pub mode: String,
    /// Object id of the staged blob or commit
    pub object: String,
    /// Stage number: 0 normal, 1 base, 2 ours, 3 theirs
    pub stage: u8,
    /// Path relative to the directory git ran in
    pub path: String,
}

impl IndexEntry {
    /// Parse one record; returns `None` for anything not in the expected shape
    #[must_use]
    pub fn parse(record: &str) -> Option<Self> {
        let (meta, path) = record.split_once('\t')?;
        let mut fields = meta.split(' ');
        let mode = fields.next()?;
        let object = fields.next()?;
        let stage = fields.next()?.parse().ok()?;
        if fields.next().is_some() || path.is_empty() {
            return None;
        }

        Some(Self {
            mode: mode.to_string(),
            object: object.to_string(),
            stage,
            path: path.to_string(),
        })
    }

    /// Stage 2 ("ours") or 3 ("theirs"): the path is unresolved
    #[must_use]
    pub const fn is_conflict_side(&self) -> bool {
        matches!(self.stage, 2 | 3)
    }

    /// Whether this entry records a submodule commit
    #[must_use]
    pub fn is_gitlink(&self) -> bool {
        self.mode == GITLINK_MODE
    }
}
