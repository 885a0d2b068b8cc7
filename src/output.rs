//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ConflictState, PendingOperation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a root query
#[derive(Debug, Serialize)]
pub struct RootResult {
    /// Absolute repository root
    pub root: String,
}

/// A listing of files
#[derive(Debug, Serialize)]
pub struct FileListResult {
    /// What was listed, e.g. "staged"
    pub kind: String,
    /// The files, one per entry
    pub files: Vec<String>,
}

/// Result of a conflict state query
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConflictResult {
    /// Clean or conflicted
    pub state: ConflictState,
    /// Operation left open in the git directory
    pub pending: Option<PendingOperation>,
}

impl RootResult {
    /// Render the result
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.root),
            OutputMode::Json => render_json(self),
        }
    }
}

impl FileListResult {
    /// Create a listing
    #[must_use]
    pub fn new(kind: impl Into<String>, files: impl IntoIterator<Item = String>) -> Self {
        Self {
            kind: kind.into(),
            files: files.into_iter().collect(),
        }
    }

    /// Render the result
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            eprintln!("No {} files.", self.kind);
            return;
        }
        for file in &self.files {
            println!("{file}");
        }
    }
}

impl ConflictResult {
    /// Render the result
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let state = match self.state {
            ConflictState::Clean => "clean".green(),
            ConflictState::Conflicted => "conflicted".red().bold(),
        };
        match self.pending {
            Some(op) => println!("{state} ({op} in progress)"),
            None => println!("{state}"),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
