//! Tests for `GitProbe` against a scripted runner
//!
//! These exercise parsing, error propagation, submodule recursion and
//! memoization without depending on the installed git.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use gitprobe::{ConflictState, Error, Git, GitProbe, PendingOperation, VersionControl};
use tempfile::TempDir;

use crate::common::mocks::{MovableDir, ScriptedRunner};

const TOPLEVEL: &str = "rev-parse --show-toplevel";
const STAGED: &str = "diff --staged --name-only --no-ext-diff -z --diff-filter=ACMRT";
const UNMERGED: &str = "ls-files -z --unmerged";
const STAGE: &str = "ls-files -z --stage";
const GIT_DIR: &str = "rev-parse --git-dir";

fn probe(runner: &Arc<ScriptedRunner>, cwd: &Path) -> GitProbe {
    GitProbe::with_git(Git::new("git", runner.clone()), Arc::new(gitprobe::FixedDir::new(cwd)))
}

fn toplevel(root: &Path) -> Vec<u8> {
    format!("{}\n", root.display()).into_bytes()
}

/// A runner that knows `root` is a repository root
fn in_repo(root: &Path) -> ScriptedRunner {
    ScriptedRunner::new().ok(root, TOPLEVEL, &toplevel(root))
}

// =============================================================================
// Root resolution
// =============================================================================

#[test]
fn outside_a_repository_is_not_a_repository() {
    let cwd = PathBuf::from("/work");
    let runner = Arc::new(ScriptedRunner::new().fail(
        &cwd,
        TOPLEVEL,
        128,
        "fatal: not a git repository (or any of the parent directories): .git\n",
    ));

    let err = probe(&runner, &cwd).root().unwrap_err();
    match err {
        Error::NotARepository { message } => assert!(message.contains("not a git repository")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_toplevel_is_not_a_repository() {
    let cwd = PathBuf::from("/srv/bare.git");
    let runner = Arc::new(ScriptedRunner::new().ok(&cwd, TOPLEVEL, b"\n"));
    assert!(probe(&runner, &cwd).root().unwrap_err().is_not_a_repository());
}

#[cfg(unix)]
#[test]
fn trailing_separator_is_stripped() {
    let cwd = PathBuf::from("/repo/src");
    let runner = Arc::new(ScriptedRunner::new().ok(&cwd, TOPLEVEL, b"/repo/\n"));
    assert_eq!(probe(&runner, &cwd).root().unwrap(), PathBuf::from("/repo"));
}

#[test]
fn missing_git_binary_is_a_spawn_error() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(ScriptedRunner::new());
    let err = probe(&runner, &cwd).root().unwrap_err();
    assert!(matches!(
        err,
        Error::Spawn { ref command, .. } if command == "git rev-parse --show-toplevel"
    ));
}

// =============================================================================
// Enumerators
// =============================================================================

#[test]
fn failing_listing_carries_command_code_and_stderr() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(in_repo(&cwd).fail(&cwd, STAGED, 128, "fatal: bad revision 'HEAD'"));

    match probe(&runner, &cwd).staged_files().unwrap_err() {
        Error::CommandFailed {
            command,
            code,
            stderr,
        } => {
            assert!(command.contains("diff --staged"));
            assert_eq!(code, Some(128));
            assert_eq!(stderr, "fatal: bad revision 'HEAD'");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn listings_are_split_on_nul_only() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(in_repo(&cwd).ok(
        &cwd,
        STAGED,
        "with space.txt\0new\nline\0интервью\0".as_bytes(),
    ));

    assert_eq!(
        probe(&runner, &cwd).staged_files().unwrap(),
        ["with space.txt", "new\nline", "интервью"]
    );
}

#[test]
fn changed_files_uses_symmetric_range() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(
        in_repo(&cwd)
            .ok(
                &cwd,
                "diff --name-only --no-ext-diff -z --diff-filter=ACMRT v1...v2 --",
                b"CHANGELOG.md\0setup.py\0",
            )
            .ok(&cwd, "diff --name-only --no-ext-diff -z --diff-filter=ACMRT v2...v1 --", b""),
    );
    let probe = probe(&runner, &cwd);

    assert_eq!(probe.changed_files("v1", "v2").unwrap(), ["CHANGELOG.md", "setup.py"]);
    assert!(probe.changed_files("v2", "v1").unwrap().is_empty());
}

#[test]
fn listings_run_at_the_root_from_a_subdirectory() {
    let root = PathBuf::from("/repo");
    let cwd = root.join("pkg");
    let runner = Arc::new(
        ScriptedRunner::new()
            .ok(&cwd, TOPLEVEL, &toplevel(&root))
            .ok(&root, "ls-files -z", b"pkg/inner.py\0top.py\0")
            .ok(&root, STAGED, b"top.py\0"),
    );
    let probe = probe(&runner, &cwd);

    assert_eq!(probe.all_files().unwrap(), ["pkg/inner.py", "top.py"]);
    assert_eq!(probe.staged_files().unwrap(), ["top.py"]);
}

#[test]
fn conflicted_files_are_never_cached() {
    let layout = Layout::new();
    let runner = Arc::new(
        layout
            .runner()
            .ok(&layout.root, UNMERGED, b"")
            .ok(&layout.root, STAGE, b""),
    );
    let probe = probe(&runner, &layout.root);

    probe.conflicted_files().unwrap();
    probe.conflicted_files().unwrap();
    assert_eq!(runner.count(UNMERGED), 2);
}

// =============================================================================
// Memoization
// =============================================================================

#[test]
fn repeated_queries_hit_the_cache() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(in_repo(&cwd).ok(&cwd, STAGED, b"a\0"));
    let probe = probe(&runner, &cwd);

    probe.staged_files().unwrap();
    probe.staged_files().unwrap();
    assert_eq!(runner.count(STAGED), 1);

    probe.clear_cache();
    probe.staged_files().unwrap();
    assert_eq!(runner.count(STAGED), 2);
}

#[test]
fn disabled_cache_always_runs_git() {
    let cwd = PathBuf::from("/repo");
    let runner = Arc::new(in_repo(&cwd).ok(&cwd, STAGED, b"a\0"));
    let probe = probe(&runner, &cwd).with_cache(false);

    probe.staged_files().unwrap();
    probe.staged_files().unwrap();
    assert_eq!(runner.count(STAGED), 2);
}

#[test]
fn cache_is_keyed_by_working_directory() {
    let a = PathBuf::from("/repo-a");
    let b = PathBuf::from("/repo-b");
    let runner = Arc::new(
        in_repo(&a)
            .ok(&b, TOPLEVEL, &toplevel(&b))
            .ok(&a, STAGED, b"from_a\0")
            .ok(&b, STAGED, b"from_b\0"),
    );
    let dir = Arc::new(MovableDir::new(&a));
    let probe = GitProbe::with_git(Git::new("git", runner.clone()), dir.clone());

    assert_eq!(probe.staged_files().unwrap(), ["from_a"]);
    dir.set(&b);
    assert_eq!(probe.staged_files().unwrap(), ["from_b"]);
    dir.set(&a);
    assert_eq!(probe.staged_files().unwrap(), ["from_a"]);
    assert_eq!(runner.count(STAGED), 2);
}

// =============================================================================
// Conflict detection
// =============================================================================

/// A root on disk with a git dir, so marker files and `.git` checks are real
struct Layout {
    _temp: TempDir,
    root: PathBuf,
    git_dir: PathBuf,
}

impl Layout {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repo");
        let git_dir = root.join(".git");
        fs::create_dir_all(&git_dir).unwrap();
        Self {
            _temp: temp,
            root,
            git_dir,
        }
    }

    fn submodule(&self, name: &str) -> PathBuf {
        let sub = self.root.join(name);
        fs::create_dir_all(sub.join(".git")).unwrap();
        sub
    }

    /// Toplevel and git dir answers for the root
    fn runner(&self) -> ScriptedRunner {
        ScriptedRunner::new()
            .ok(&self.root, TOPLEVEL, &toplevel(&self.root))
            .ok(&self.root, GIT_DIR, b".git\n")
    }
}

#[test]
fn clean_without_unmerged_entries_even_mid_merge() {
    let layout = Layout::new();
    fs::write(layout.git_dir.join("MERGE_HEAD"), "abc\n").unwrap();
    fs::write(layout.git_dir.join("MERGE_MSG"), "Merge\n\n# Conflicts:\n#\tresolved\n").unwrap();
    let runner = Arc::new(
        layout
            .runner()
            .ok(&layout.root, UNMERGED, b"")
            .ok(&layout.root, STAGE, b"100644 abc 0\tresolved\0"),
    );
    let probe = probe(&runner, &layout.root);

    assert_eq!(probe.conflict_state().unwrap(), ConflictState::Clean);
    assert!(!probe.is_in_merge_conflict().unwrap());
    assert_eq!(probe.pending_operation().unwrap(), Some(PendingOperation::Merge));
}

#[test]
fn union_of_merge_msg_index_and_submodules() {
    let layout = Layout::new();
    let sub = layout.submodule("sub");
    let sub_git_dir = layout.git_dir.join("modules/sub");
    fs::create_dir_all(&sub_git_dir).unwrap();
    let msg = "Merge\n\nConflicts:\n\tlisted.txt\n\tboth\n";
    fs::write(layout.git_dir.join("MERGE_MSG"), msg).unwrap();

    let runner = Arc::new(
        layout
            .runner()
            .ok(
                &layout.root,
                UNMERGED,
                b"100644 a 1\tboth\0100644 b 2\tboth\0100644 c 3\tboth\0100644 d 1\tbase_only\0",
            )
            .ok(&layout.root, STAGE, b"100644 e 0\tplain\0160000 f 0\tsub\0")
            .ok(&sub, UNMERGED, b"100644 g 2\tinner.txt\0100644 h 3\tinner.txt\0")
            .ok(&sub, STAGE, b"100644 g 2\tinner.txt\0100644 h 3\tinner.txt\0")
            .ok(&sub, GIT_DIR, format!("{}\n", sub_git_dir.display()).as_bytes()),
    );
    let probe = probe(&runner, &layout.root);

    assert!(probe.is_in_merge_conflict().unwrap());
    let files: Vec<String> = probe.conflicted_files().unwrap().into_iter().collect();
    assert_eq!(files, ["both", "listed.txt", "sub/inner.txt"]);
}

#[test]
fn conflicted_submodule_makes_parent_conflicted() {
    let layout = Layout::new();
    let sub = layout.submodule("libs/sub");
    let runner = Arc::new(
        layout
            .runner()
            .ok(&layout.root, UNMERGED, b"")
            .ok(&layout.root, STAGE, b"160000 f 0\tlibs/sub\0")
            .ok(&sub, UNMERGED, b"100644 g 3\tx\0"),
    );

    assert_eq!(probe(&runner, &layout.root).conflict_state().unwrap(), ConflictState::Conflicted);
}

#[test]
fn failing_submodule_query_is_an_error_not_clean() {
    let layout = Layout::new();
    let sub = layout.submodule("sub");
    let runner = Arc::new(
        layout
            .runner()
            .ok(&layout.root, UNMERGED, b"")
            .ok(&layout.root, STAGE, b"160000 f 0\tsub\0")
            .fail(&sub, UNMERGED, 128, "fatal: index file corrupt"),
    );

    let err = probe(&runner, &layout.root).is_in_merge_conflict().unwrap_err();
    assert!(matches!(err, Error::CommandFailed { code: Some(128), .. }));
}

#[test]
fn uninitialized_submodule_is_skipped() {
    let layout = Layout::new();
    let runner = Arc::new(
        layout
            .runner()
            .ok(&layout.root, UNMERGED, b"")
            .ok(&layout.root, STAGE, b"160000 f 0\tnot_cloned\0"),
    );

    assert_eq!(probe(&runner, &layout.root).conflict_state().unwrap(), ConflictState::Clean);
    assert_eq!(runner.count(UNMERGED), 1);
}

#[test]
fn pending_cherry_pick_is_reported() {
    let layout = Layout::new();
    fs::write(layout.git_dir.join("CHERRY_PICK_HEAD"), "abc\n").unwrap();
    let runner = Arc::new(layout.runner());

    assert_eq!(
        probe(&runner, &layout.root).pending_operation().unwrap(),
        Some(PendingOperation::CherryPick)
    );
}

#[test]
fn no_marker_files_means_nothing_pending() {
    let layout = Layout::new();
    let runner = Arc::new(layout.runner());
    assert_eq!(probe(&runner, &layout.root).pending_operation().unwrap(), None);
}
