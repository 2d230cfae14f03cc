// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Staged diff: changed-file list and patch text.

use crate::error::{GitError, KommitError, Result};
use std::path::PathBuf;

use super::repo::Repository;

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    TypeChange,
}

impl ChangeType {
    /// Single-letter status code, as in `git diff --name-status`.
    pub fn code(&self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Deleted => 'D',
            ChangeType::Modified => 'M',
            ChangeType::Renamed => 'R',
            ChangeType::Copied => 'C',
            ChangeType::TypeChange => 'T',
        }
    }
}

/// Information about a changed file.
#[derive(Debug, Clone)]
pub struct FileChange {
    /// Path to the file.
    pub path: PathBuf,
    /// Type of change.
    pub change_type: ChangeType,
    /// Old path (for renames and copies).
    pub old_path: Option<PathBuf>,
}

impl FileChange {
    /// Format as a name-status line.
    pub fn name_status(&self) -> String {
        match self.old_path {
            Some(ref old) => format!(
                "{}\t{}\t{}",
                self.change_type.code(),
                old.display(),
                self.path.display()
            ),
            None => format!("{}\t{}", self.change_type.code(), self.path.display()),
        }
    }
}

/// Everything staged for the next commit.
#[derive(Debug, Clone, Default)]
pub struct StagedChanges {
    /// Per-file changes.
    pub files: Vec<FileChange>,
    /// Unified patch text.
    pub patch: String,
}

impl StagedChanges {
    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Name-status lines for every changed file.
    pub fn name_status_lines(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name_status()).collect()
    }
}

/// Get the staged changes of a repository (HEAD tree against the index).
pub fn staged_changes(repo: &Repository) -> Result<StagedChanges> {
    let head = repo.inner().head().ok();
    let head_tree = head.as_ref().and_then(|h| h.peel_to_tree().ok());

    let mut diff = repo
        .inner()
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(diff_failed)?;
    diff.find_similar(None).map_err(diff_failed)?;

    let files = diff
        .deltas()
        .map(|delta| {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_path_buf())
                .unwrap_or_default();

            let change_type = match delta.status() {
                git2::Delta::Added => ChangeType::Added,
                git2::Delta::Deleted => ChangeType::Deleted,
                git2::Delta::Renamed => ChangeType::Renamed,
                git2::Delta::Copied => ChangeType::Copied,
                git2::Delta::Typechange => ChangeType::TypeChange,
                _ => ChangeType::Modified,
            };

            let old_path = match change_type {
                ChangeType::Renamed | ChangeType::Copied => {
                    delta.old_file().path().map(|p| p.to_path_buf())
                }
                _ => None,
            };

            FileChange {
                path,
                change_type,
                old_path,
            }
        })
        .collect();

    let mut patch = String::new();
    diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
        // File and hunk headers carry their own text
        if matches!(line.origin(), '+' | '-' | ' ') {
            patch.push(line.origin());
        }
        patch.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(diff_failed)?;

    tracing::debug!("Staged diff: {} files", diff.deltas().len());

    Ok(StagedChanges { files, patch })
}

fn diff_failed(e: git2::Error) -> KommitError {
    KommitError::Git(GitError::DiffFailed {
        message: e.message().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn stage(dir: &Path, repo: &git2::Repository, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_name_status() {
        let change = FileChange {
            path: PathBuf::from("src/new.rs"),
            change_type: ChangeType::Renamed,
            old_path: Some(PathBuf::from("src/old.rs")),
        };
        assert_eq!(change.name_status(), "R\tsrc/old.rs\tsrc/new.rs");

        let change = FileChange {
            path: PathBuf::from("README.md"),
            change_type: ChangeType::Modified,
            old_path: None,
        };
        assert_eq!(change.name_status(), "M\tREADME.md");
    }

    #[test]
    fn test_staged_changes_in_fresh_repo() {
        let dir = TempDir::new().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        stage(dir.path(), &repo, "hello.txt", "hello\nworld\n");

        let wrapper = Repository::open(dir.path()).unwrap();
        let staged = staged_changes(&wrapper).unwrap();

        assert_eq!(staged.name_status_lines(), vec!["A\thello.txt"]);
        assert!(staged.patch.contains("+hello"));
        assert!(staged.patch.contains("+world"));
        assert!(staged.patch.contains("diff --git a/hello.txt b/hello.txt"));
    }

    #[test]
    fn test_nothing_staged() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();

        let wrapper = Repository::open(dir.path()).unwrap();
        let staged = staged_changes(&wrapper).unwrap();
        assert!(staged.is_empty());
        assert!(staged.patch.is_empty());
    }
}
