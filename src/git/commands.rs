// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for history text and committing.

use crate::error::{GitError, KommitError, Result};
use crate::template::LOG_FORMAT;
use std::path::Path;
use std::process::Command;

/// Raw history text gathered before selection.
#[derive(Debug, Clone, Default)]
pub struct HistoryText {
    /// `git log` output, one `<hash>|<refs>|<subject>` per line.
    pub log: String,
    /// `git reflog` output in its default format.
    pub reflog: String,
}

/// Run a read-only git command and return its stdout.
fn git_output(workdir: &Path, args: &[&str]) -> Result<String> {
    tracing::debug!("Running git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|e| {
            KommitError::Git(GitError::CommandFailed {
                command: args.join(" "),
                message: e.to_string(),
            })
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(KommitError::Git(GitError::CommandFailed {
            command: args.join(" "),
            message: stderr.trim().to_string(),
        }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the log as `<hash>|<refs>|<subject>` lines.
pub fn log_text(workdir: &Path, max_count: usize) -> Result<String> {
    let format = format!("--pretty=format:{}", LOG_FORMAT);
    let count = max_count.to_string();

    // User colour and signature settings would corrupt the field layout
    let mut args = vec!["log", "--no-color", "--no-show-signature", format.as_str()];
    if max_count > 0 {
        args.push("-n");
        args.push(&count);
    }

    git_output(workdir, &args)
}

/// Get the reflog in its default format.
pub fn reflog_text(workdir: &Path) -> Result<String> {
    git_output(workdir, &["reflog", "--no-color"])
}

/// Read log and reflog concurrently.
///
/// A failing query (e.g. no commits yet) yields empty text.
pub fn read_history(workdir: &Path, max_count: usize) -> HistoryText {
    let (log, reflog) = std::thread::scope(|s| {
        let log = s.spawn(|| log_text(workdir, max_count));
        let reflog = s.spawn(|| reflog_text(workdir));
        (join_or_empty(log.join(), "log"), join_or_empty(reflog.join(), "reflog"))
    });

    HistoryText { log, reflog }
}

fn join_or_empty(joined: std::thread::Result<Result<String>>, what: &str) -> String {
    match joined {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::warn!("Skipping {} candidates: {}", what, e);
            String::new()
        }
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Create a commit with the given message and return git's summary.
pub fn create_commit(workdir: &Path, message: &str, no_verify: bool) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.current_dir(workdir).arg("commit");

    if no_verify {
        cmd.arg("-n");
    }
    cmd.arg("--message").arg(message);

    let output = cmd.output().map_err(|e| {
        KommitError::Git(GitError::CommitFailed {
            message: format!("Failed to run git commit: {}", e),
        })
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() { stdout } else { stderr };
        return Err(KommitError::Git(GitError::CommitFailed {
            message: detail.trim().to_string(),
        }));
    }

    let summary = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();
    Ok(summary)
}
