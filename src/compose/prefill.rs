// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Editor pre-fill text.

use crate::git::StagedChanges;

/// Prefix marking lines that are dropped from the final message.
pub const COMMENT_PREFIX: &str = "#";

/// Build the text opened in the editor: the chosen content, a blank line,
/// then the changed files and the staged patch as comment lines.
pub fn prefill_text(content: &str, staged: &StagedChanges) -> String {
    let mut metadata = vec!["Files changed:".to_string()];
    metadata.extend(staged.name_status_lines());
    metadata.push(String::new());
    metadata.extend(staged.patch.lines().map(|l| l.to_string()));

    let metadata = metadata
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{} {}", COMMENT_PREFIX, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", content, metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{ChangeType, FileChange};
    use std::path::PathBuf;

    #[test]
    fn test_prefill_layout() {
        let staged = StagedChanges {
            files: vec![FileChange {
                path: PathBuf::from("src/lib.rs"),
                change_type: ChangeType::Modified,
                old_path: None,
            }],
            patch: "diff --git a/src/lib.rs b/src/lib.rs\n+added\n".to_string(),
        };

        let text = prefill_text("feat(JIRA-42): ", &staged);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "feat(JIRA-42): ");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "# Files changed:");
        assert_eq!(lines[3], "# M\tsrc/lib.rs");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "# diff --git a/src/lib.rs b/src/lib.rs");
        assert_eq!(lines[6], "# +added");
    }

    #[test]
    fn test_blank_patch_lines_stay_blank() {
        let staged = StagedChanges {
            files: vec![],
            patch: "a\n\nb".to_string(),
        };
        let text = prefill_text("x", &staged);
        assert!(text.ends_with("# a\n\n# b"));
    }
}
