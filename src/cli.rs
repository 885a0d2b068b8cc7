//! CLI definitions and entry point

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::adapters::{FileSource, GitProbe, ProcessCwd};
use crate::config::ProbeConfig;
use crate::core::ports::VersionControl;
use crate::output::{ConflictResult, FileListResult, OutputMode, RootResult};

/// gitprobe - Inspect a git working tree the way a hook runner needs to
#[derive(Parser, Debug)]
#[command(
    name = "gitprobe",
    version,
    about = "Inspect a git working tree for hook runners",
    long_about = "Answer the questions a pre-commit style hook runner asks:\n\n\
                  where the repository root is, which files are tracked, staged or\n\
                  changed, and whether a merge left files in conflict."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Git executable to run (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub git: Option<String>,

    /// Recompute every answer instead of memoizing per directory
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// What to inspect
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the top-level directory of the working tree
    Root,

    /// List every tracked file
    AllFiles,

    /// List files staged for commit (deletions excluded)
    Staged,

    /// List files changed on TARGET since it diverged from BASE
    Changed {
        /// Revision the comparison starts from
        base: String,
        /// Revision whose changes are listed
        target: String,
    },

    /// Report whether the tree has unresolved conflicts
    Conflict,

    /// List files in conflict, including inside submodules
    Conflicted,

    /// List files selected by include/exclude regular expressions
    Match {
        /// Keep files whose path matches this pattern anywhere
        #[arg(short, long, default_value = "")]
        include: String,

        /// Drop files whose path matches this pattern anywhere
        #[arg(short, long, default_value = "^$")]
        exclude: String,

        /// Candidate files to select from
        #[arg(short, long, value_enum, default_value_t)]
        source: FileSource,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = ProbeConfig::load()?;
    if let Some(git) = cli.git {
        config.git.binary = git;
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }

    let probe = GitProbe::from_config(&config, Arc::new(ProcessCwd));

    match cli.command {
        Command::Root => {
            let root = probe.root()?;
            RootResult {
                root: root.display().to_string(),
            }
            .render(output_mode);
        },
        Command::AllFiles => FileListResult::new("tracked", probe.all_files()?).render(output_mode),
        Command::Staged => FileListResult::new("staged", probe.staged_files()?).render(output_mode),
        Command::Changed { base, target } => {
            let changed = probe.changed_files(&base, &target)?;
            FileListResult::new("changed", changed).render(output_mode);
        },
        Command::Conflict => ConflictResult {
            state: probe.conflict_state()?,
            pending: probe.pending_operation()?,
        }
        .render(output_mode),
        Command::Conflicted => {
            FileListResult::new("conflicted", probe.conflicted_files()?).render(output_mode);
        },
        Command::Match {
            include,
            exclude,
            source,
        } => {
            let matched = probe.matcher(source).matching(&include, &exclude)?;
            FileListResult::new("matching", matched).render(output_mode);
        },
    }

    Ok(())
}
