// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only queries feeding the candidate set, plus the final commit.

pub mod commands;
pub mod diff;
mod repo;

pub use commands::{create_commit, log_text, read_history, reflog_text, HistoryText};
pub use diff::{staged_changes, ChangeType, FileChange, StagedChanges};
pub use repo::Repository;
