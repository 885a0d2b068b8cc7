//! Conflict state of a working tree
//!
//! Marker files in the git directory only say that an operation is still open.
//! Whether anything is actually unresolved is decided from the index.

use serde::Serialize;

/// Observable conflict state, recomputed on every query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictState {
    /// No index entry carries a conflict stage
    #[default]
    Clean,
    /// At least one path (here or in a submodule) is unresolved
    Conflicted,
}

impl ConflictState {
    /// Build a state from a "has unresolved entries" flag
    #[must_use]
    pub const fn from_conflicted(conflicted: bool) -> Self {
        if conflicted { Self::Conflicted } else { Self::Clean }
    }

    /// Whether this is [`ConflictState::Conflicted`]
    #[must_use]
    pub const fn is_conflicted(self) -> bool {
        matches!(self, Self::Conflicted)
    }
}

impl std::fmt::Display for ConflictState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Conflicted => write!(f, "conflicted"),
        }
    }
}

/// An operation git has started but not concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PendingOperation {
    /// `MERGE_HEAD` is present
    Merge,
    /// `CHERRY_PICK_HEAD` is present
    CherryPick,
    /// `REVERT_HEAD` is present
    Revert,
}

impl PendingOperation {
    /// Checked in this order; a merge wins over a cherry-pick left behind
    pub const ALL: [Self; 3] = [Self::Merge, Self::CherryPick, Self::Revert];

    /// Marker file inside the git directory announcing this operation
    #[must_use]
    pub const fn marker_file(self) -> &'static str {
        match self {
            Self::Merge => "MERGE_HEAD",
            Self::CherryPick => "CHERRY_PICK_HEAD",
            Self::Revert => "REVERT_HEAD",
        }
    }
}

impl std::fmt::Display for PendingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::CherryPick => write!(f, "cherry-pick"),
            Self::Revert => write!(f, "revert"),
        }
    }
}
