// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the kommit application.
//!
//! Errors are grouped by concern and folded into [`KommitError`]. Parsing
//! problems in history text never show up here: the parsers absorb them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for kommit operations.
#[derive(Error, Debug)]
pub enum KommitError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Finder errors
    #[error("Finder error: {0}")]
    Finder(#[from] FinderError),

    // Editor errors
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    // Nothing to commit, or the user backed out
    #[error("{0}")]
    NoInput(#[from] NoInput),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for KommitError {
    fn from(err: dialoguer::Error) -> Self {
        KommitError::Ui(err.to_string())
    }
}

/// Reasons a run halts without producing a commit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoInput {
    #[error("no staged changes")]
    NoStagedChanges,

    #[error("no template selected")]
    Aborted,

    #[error("file hasn't changed.")]
    Unchanged,

    #[error("empty commit message")]
    EmptyMessage,
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },

    #[error("Failed to create commit: {message}")]
    CommitFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Errors from the interactive finder session.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("'{program}' is not installed or not on PATH")]
    NotInstalled { program: String },

    #[error("Failed to start '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("'{program}' exited with status {status}")]
    Failed { program: String, status: i32 },

    #[error("Unexpected finder output: '{output}'")]
    UnexpectedOutput { output: String },

    #[error("Selected candidate {id} does not exist")]
    UnknownCandidate { id: usize },
}

/// Errors from the editor session.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No editor found (tried: {tried})")]
    NotFound { tried: String },

    #[error("Failed to start editor '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Editor '{program}' exited with status {status}")]
    Failed { program: String, status: i32 },
}

/// Result type alias for kommit operations.
pub type Result<T> = std::result::Result<T, KommitError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| KommitError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
