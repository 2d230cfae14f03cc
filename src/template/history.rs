// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Parsers turning log and reflog text into candidates.
//!
//! Neither parser fails: malformed log lines degrade to a best-effort
//! candidate and reflog lines that are not plain commits are skipped.

use lazy_static::lazy_static;
use regex::Regex;

use super::candidate::{Candidate, Source};

/// Separator between the fields of one log line.
pub const LOG_FIELD_SEPARATOR: char = '|';

/// `git log` format producing `<hash>|<ref names>|<subject>`.
pub const LOG_FORMAT: &str = "%h|%d|%s";

lazy_static! {
    /// `<hash> <ref>: commit[ (<kind>)]: <message>`
    static ref REFLOG_COMMIT_REGEX: Regex =
        Regex::new(r"^(\w+)\s+(\S+):\scommit(?:\s\([^)]+\))?:\s(.*)").unwrap();
}

/// Parse `git log --pretty=format:%h|%d|%s` output.
pub fn parse_log(text: &str) -> Vec<Candidate> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(id, line)| parse_log_line(id, line))
        .collect()
}

/// Parse a single log line.
///
/// A subject containing the separator keeps only its first segment.
fn parse_log_line(id: usize, line: &str) -> Candidate {
    let fields: Vec<&str> = line.split(LOG_FIELD_SEPARATOR).collect();

    if fields.len() < 3 {
        tracing::debug!("Malformed log line: {:?}", line);
        let content = fields.last().map(|s| s.trim()).unwrap_or_default();
        return Candidate::new(id, content, vec![String::new(), String::new()], Source::Log);
    }

    let hash = fields[0].trim().to_string();
    let refs = strip_ref_parens(fields[1].trim()).to_string();

    Candidate::new(id, fields[2], vec![hash, refs], Source::Log)
}

/// Strip one leading `(` and one trailing `)`.
fn strip_ref_parens(refs: &str) -> &str {
    let refs = refs.strip_prefix('(').unwrap_or(refs);
    refs.strip_suffix(')').unwrap_or(refs)
}

/// Parse `git reflog` output, keeping only commit entries.
pub fn parse_reflog(text: &str) -> Vec<Candidate> {
    text.lines()
        .filter_map(|line| {
            let captures = REFLOG_COMMIT_REGEX.captures(line)?;
            let message = captures.get(3)?.as_str();
            if message.trim().is_empty() {
                return None;
            }
            Some((
                message.to_string(),
                vec![captures[1].to_string(), captures[2].to_string()],
            ))
        })
        .enumerate()
        .map(|(id, (content, keywords))| Candidate::new(id, content, keywords, Source::Reflog))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_line() {
        let candidates = parse_log("abc123|(HEAD -> main)|fix: bug");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].content, "fix: bug");
        assert_eq!(candidates[0].keywords, vec!["abc123", "HEAD -> main"]);
        assert_eq!(candidates[0].source, Source::Log);
    }

    #[test]
    fn test_parse_log_decoration_with_leading_space() {
        // %d renders as " (HEAD -> main, origin/main)"
        let candidates = parse_log("abc123| (HEAD -> main, origin/main)|feat: thing");
        assert_eq!(candidates[0].keywords[1], "HEAD -> main, origin/main");
    }

    #[test]
    fn test_parse_log_empty_refs() {
        let candidates = parse_log("abc123||chore: tidy\ndef456||docs: readme");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].keywords, vec!["abc123", ""]);
        assert_eq!(candidates[1].content, "docs: readme");
        assert_eq!(candidates[1].id, 1);
    }

    #[test]
    fn test_parse_log_pipe_in_subject_is_truncated() {
        let candidates = parse_log("abc123||feat: a | b");
        assert_eq!(candidates[0].content, "feat: a ");
    }

    #[test]
    fn test_parse_log_pipe_in_ref_name_shifts_fields() {
        // A ref named `fix|pipe` splits the decoration; the subject is lost
        let candidates = parse_log("abc123| (HEAD -> fix|pipe)|feat: x");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].keywords, vec!["abc123", "HEAD -> fix"]);
        assert_eq!(candidates[0].content, "pipe)");
    }

    #[test]
    fn test_parse_log_malformed_line() {
        let candidates = parse_log("just a subject\nabc|fix: short");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].content, "just a subject");
        assert_eq!(candidates[0].keywords, vec!["", ""]);
        assert_eq!(candidates[1].content, "fix: short");
        assert_eq!(candidates[1].keywords, vec!["", ""]);
    }

    #[test]
    fn test_parse_log_skips_blank_lines() {
        let candidates = parse_log("\na|b|c\n\n");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 0);
    }

    #[test]
    fn test_parse_reflog_commit() {
        let candidates = parse_reflog("abc123 HEAD@{0}: commit: message here");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].content, "message here");
        assert_eq!(candidates[0].keywords, vec!["abc123", "HEAD@{0}"]);
        assert_eq!(candidates[0].source, Source::Reflog);
    }

    #[test]
    fn test_parse_reflog_commit_kinds() {
        let text = "\
1111111 HEAD@{0}: commit (amend): amended message
2222222 HEAD@{1}: checkout: moving from main to feat/x
3333333 HEAD@{2}: reset: moving to HEAD~1
4444444 HEAD@{3}: commit (initial): first";
        let candidates = parse_reflog(text);

        let contents: Vec<&str> = candidates.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["amended message", "first"]);
        assert_eq!(candidates[1].id, 1);
        assert_eq!(candidates[1].keywords, vec!["4444444", "HEAD@{3}"]);
    }

    #[test]
    fn test_parse_reflog_non_commit_only() {
        let candidates = parse_reflog("abc123 HEAD@{4}: checkout: moving from main to dev");
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_strip_ref_parens() {
        assert_eq!(strip_ref_parens("(tag: v1)"), "tag: v1");
        assert_eq!(strip_ref_parens("main"), "main");
        assert_eq!(strip_ref_parens(""), "");
    }
}
