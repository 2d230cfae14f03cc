// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Fixed-width line rendering for the finder.

use crate::template::{Candidate, CandidateSet, Source};

/// Field delimiter; never appears in rendered field text.
pub const DELIMITER: &str = "\t\t";

/// Default width of the content column.
pub const CONTENT_WIDTH: usize = 60;

/// Default width of the keywords column.
pub const KEYWORDS_WIDTH: usize = 75;

const DOTS: &str = "...";

/// Renders candidates as `id<D>content<D>keywords` lines.
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer {
    content_width: usize,
    keywords_width: usize,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new(CONTENT_WIDTH, KEYWORDS_WIDTH)
    }
}

impl LineRenderer {
    /// Create a renderer with explicit column widths.
    pub fn new(content_width: usize, keywords_width: usize) -> Self {
        Self {
            content_width,
            keywords_width,
        }
    }

    /// Render one candidate.
    pub fn render(&self, candidate: &Candidate) -> String {
        [
            candidate.id.to_string(),
            fit(&candidate.content, self.content_width),
            fit(&candidate.keywords.join(" "), self.keywords_width),
        ]
        .join(DELIMITER)
    }

    /// Render the column titles.
    ///
    /// The id column is hidden in the finder, so the header has no id field.
    pub fn header(&self) -> String {
        [
            fit("Content", self.content_width),
            fit("Keywords", self.keywords_width),
        ]
        .join(DELIMITER)
    }

    /// Render every candidate of one source, one per line.
    pub fn render_block(&self, set: &CandidateSet, source: Source) -> String {
        set.by_source(source)
            .map(|c| self.render(c))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Truncate with dots or right-pad with spaces to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    // Tabs would collide with the delimiter, newlines with the line format
    let text: String = text
        .chars()
        .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let len = text.chars().count();
    if len >= width {
        let keep = width.saturating_sub(DOTS.len());
        let mut cut: String = text.chars().take(keep).collect();
        cut.push_str(DOTS);
        cut
    } else {
        format!("{:<width$}", text, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: usize, content: &str, keywords: &[&str]) -> Candidate {
        Candidate::new(
            id,
            content,
            keywords.iter().map(|s| s.to_string()).collect(),
            Source::Static,
        )
    }

    #[test]
    fn test_fit_pads() {
        assert_eq!(fit("abc", 6), "abc   ");
        assert_eq!(fit("", 4), "    ");
    }

    #[test]
    fn test_fit_truncates_at_width() {
        let long = "x".repeat(80);
        let cut = fit(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));

        // Exactly the width is truncated too
        let exact = fit("abcdef", 6);
        assert_eq!(exact, "abc...");
    }

    #[test]
    fn test_fit_counts_characters() {
        let text = "é".repeat(10);
        let cut = fit(&text, 8);
        assert_eq!(cut.chars().count(), 8);
        assert_eq!(cut, "ééééé...");
        assert_eq!(fit("é", 3).chars().count(), 3);
    }

    #[test]
    fn test_fit_strips_tabs() {
        assert_eq!(fit("a\t\tb", 6), "a  b  ");
    }

    #[test]
    fn test_render_line() {
        let renderer = LineRenderer::new(10, 12);
        let line = renderer.render(&candidate(7, "feat: ", &["feat", "plain"]));
        assert_eq!(line, "7\t\tfeat:     \t\tfeat plain  ");

        let fields: Vec<&str> = line.split(DELIMITER).collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "7");
    }

    #[test]
    fn test_render_is_stable() {
        let renderer = LineRenderer::default();
        let c = candidate(3, "fix: bug", &["abc123", "HEAD -> main"]);
        assert_eq!(renderer.render(&c), renderer.render(&c));
    }

    #[test]
    fn test_distinct_ids_render_distinct_lines() {
        let renderer = LineRenderer::default();
        let a = candidate(1, "same", &["k"]);
        let b = candidate(2, "same", &["k"]);
        assert_ne!(renderer.render(&a), renderer.render(&b));
    }

    #[test]
    fn test_header() {
        let renderer = LineRenderer::default();
        let header = renderer.header();
        let fields: Vec<&str> = header.split(DELIMITER).collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].trim_end(), "Content");
        assert_eq!(fields[0].chars().count(), CONTENT_WIDTH);
        assert_eq!(fields[1].chars().count(), KEYWORDS_WIDTH);
    }

    #[test]
    fn test_render_block_per_source() {
        let set = CandidateSet::assemble(
            vec![candidate(0, "static", &[])],
            vec![
                Candidate::new(0, "one", vec![], Source::Log),
                Candidate::new(1, "two", vec![], Source::Log),
            ],
            vec![],
        );
        let renderer = LineRenderer::new(6, 4);
        let block = renderer.render_block(&set, Source::Log);
        assert_eq!(block, "1\t\tone   \t\t    \n2\t\ttwo   \t\t    ");
        assert_eq!(renderer.render_block(&set, Source::Reflog), "");
    }
}
