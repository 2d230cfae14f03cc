// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Editor session.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::SystemTime;

use crate::config::EditorConfig;
use crate::error::{EditorError, KommitError, NoInput, Result};
use crate::template::EditHint;

use super::prefill::COMMENT_PREFIX;

/// Editors tried in order when none is configured.
const FALLBACK_EDITORS: &[&str] = &["nvim", "vim"];

/// A resolved editor executable plus fixed arguments.
#[derive(Debug, Clone)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Resolve the editor from configuration, falling back to nvim, then vim.
    pub fn resolve(config: &EditorConfig) -> Result<Self> {
        let candidates: Vec<&str> = match config.command {
            Some(ref command) => vec![command.as_str()],
            None => FALLBACK_EDITORS.to_vec(),
        };

        let program = candidates
            .iter()
            .find(|c| which::which(c).is_ok())
            .ok_or_else(|| {
                KommitError::Editor(EditorError::NotFound {
                    tried: candidates.join(", "),
                })
            })?;

        tracing::debug!("Using editor: {}", program);

        Ok(Self {
            program: program.to_string(),
            args: config.args.clone(),
        })
    }

    /// Arguments for editing `file` with an optional hint.
    pub fn args_for(&self, file: &Path, hint: Option<&EditHint>) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(file.display().to_string());
        if let Some(hint) = hint {
            args.extend(hint.editor_args());
        }
        args
    }

    /// Open `file` in the foreground and return the cleaned message.
    ///
    /// The file must be modified by the editor; saving the pre-fill
    /// unchanged still counts as a change.
    pub fn edit(&self, file: &Path, hint: Option<&EditHint>) -> Result<String> {
        let baseline = modified_at(file)?;

        let args = self.args_for(file, hint);
        tracing::debug!("Starting {} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| {
                KommitError::Editor(EditorError::SpawnFailed {
                    program: self.program.clone(),
                    message: e.to_string(),
                })
            })?;

        if !status.success() {
            return Err(KommitError::Editor(EditorError::Failed {
                program: self.program.clone(),
                status: status.code().unwrap_or(-1),
            }));
        }

        if modified_at(file)? == baseline {
            return Err(NoInput::Unchanged.into());
        }

        let message = clean_message(&fs::read_to_string(file)?);
        if message.is_empty() {
            return Err(NoInput::EmptyMessage.into());
        }

        Ok(message)
    }
}

fn modified_at(file: &Path) -> Result<SystemTime> {
    Ok(fs::metadata(file)?.modified()?)
}

/// Trim every line and drop blank and comment lines.
pub fn clean_message(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !l.starts_with(COMMENT_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::InsertMode;
    use std::path::PathBuf;

    #[test]
    fn test_clean_message() {
        let text = "feat(JIRA-42): add thing  \n\n# Files changed:\n# M\ta.rs\n\n  body line\n";
        assert_eq!(clean_message(text), "feat(JIRA-42): add thing\nbody line");
    }

    #[test]
    fn test_clean_message_only_comments() {
        assert_eq!(clean_message("# one\n\n   # two\n"), "");
    }

    #[test]
    fn test_args_for() {
        let editor = EditorCommand {
            program: "nvim".to_string(),
            args: vec!["--clean".to_string()],
        };
        let hint = EditHint {
            normal: vec!["da>".to_string()],
            insert: Some(InsertMode::Cursor),
        };
        let args = editor.args_for(&PathBuf::from("/w/COMMIT_EDITMSG"), Some(&hint));
        assert_eq!(
            args,
            vec!["--clean", "/w/COMMIT_EDITMSG", "-c", "norm da>", "+startinsert"]
        );

        let args = editor.args_for(&PathBuf::from("/w/m"), None);
        assert_eq!(args, vec!["--clean", "/w/m"]);
    }

    #[test]
    fn test_resolve_missing_editor() {
        let config = EditorConfig {
            command: Some("definitely-not-an-editor-kommit".to_string()),
            args: vec![],
        };
        let result = EditorCommand::resolve(&config);
        assert!(matches!(
            result,
            Err(KommitError::Editor(EditorError::NotFound { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_unchanged_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("msg");
        fs::write(&file, "feat: ").unwrap();

        let editor = EditorCommand {
            program: "true".to_string(),
            args: vec![],
        };
        let result = editor.edit(&file, None);
        assert!(matches!(result, Err(KommitError::NoInput(NoInput::Unchanged))));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("msg");
        fs::write(&file, "feat: ").unwrap();

        let editor = EditorCommand {
            program: "false".to_string(),
            args: vec![],
        };
        let result = editor.edit(&file, None);
        assert!(matches!(
            result,
            Err(KommitError::Editor(EditorError::Failed { status: 1, .. }))
        ));
    }
}
