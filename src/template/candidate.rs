// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Candidate records and the merged candidate set.

use serde::{Deserialize, Serialize};

/// Which catalog produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Static,
    Log,
    Reflog,
}

impl Source {
    /// Get the string representation of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Static => "static",
            Source::Log => "log",
            Source::Reflog => "reflog",
        }
    }

    /// Get all sources in display order.
    pub fn all() -> &'static [Source] {
        &[Source::Static, Source::Log, Source::Reflog]
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the editor places the cursor in insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertMode {
    /// Start inserting where the cursor already is.
    Cursor,
    /// Start inserting at the end of the first line.
    LineEnd,
}

/// Directives for the editor session that follows a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditHint {
    /// Normal-mode commands run before editing starts (e.g. `da>`).
    pub normal: Vec<String>,

    /// Enter insert mode once the file is open.
    pub insert: Option<InsertMode>,
}

impl EditHint {
    /// Hint that only enters insert mode at the end of the line.
    pub fn insert_at_end() -> Self {
        Self {
            normal: Vec::new(),
            insert: Some(InsertMode::LineEnd),
        }
    }

    /// Whether the hint asks for nothing.
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.insert.is_none()
    }

    /// Translate the hint into vim-family editor arguments.
    pub fn editor_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for command in &self.normal {
            args.push("-c".to_string());
            args.push(format!("norm {}", command));
        }
        match self.insert {
            Some(InsertMode::LineEnd) => args.push("+startinsert!".to_string()),
            Some(InsertMode::Cursor) => args.push("+startinsert".to_string()),
            None => {}
        }
        args
    }
}

/// One selectable commit-message seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Position within its source until assembled, globally unique afterwards.
    pub id: usize,
    /// Text that seeds the commit message.
    pub content: String,
    /// Short tags used for search and display.
    pub keywords: Vec<String>,
    /// Catalog that produced this candidate.
    pub source: Source,
    /// Editor directives for this candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_hint: Option<EditHint>,
}

impl Candidate {
    /// Create a candidate without an edit hint.
    pub fn new(
        id: usize,
        content: impl Into<String>,
        keywords: Vec<String>,
        source: Source,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            keywords,
            source,
            edit_hint: None,
        }
    }

    /// Attach an edit hint.
    pub fn with_edit_hint(mut self, hint: Option<EditHint>) -> Self {
        self.edit_hint = hint.filter(|h| !h.is_empty());
        self
    }
}

/// All candidates of one invocation, addressable by a single global id.
///
/// Ids are assigned by a running counter across static, log and reflog
/// candidates, in that order, so an id always equals the candidate's index.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Merge the three sources and renumber them.
    ///
    /// Candidates with blank content are dropped before numbering.
    pub fn assemble(
        static_templates: Vec<Candidate>,
        log: Vec<Candidate>,
        reflog: Vec<Candidate>,
    ) -> Self {
        let candidates: Vec<Candidate> = static_templates
            .into_iter()
            .chain(log)
            .chain(reflog)
            .filter(|c| {
                let keep = !c.content.trim().is_empty();
                if !keep {
                    tracing::debug!("Dropping {} candidate with empty content", c.source);
                }
                keep
            })
            .enumerate()
            .map(|(id, mut c)| {
                c.id = id;
                c
            })
            .collect();

        Self { candidates }
    }

    /// Look up a candidate by its global id.
    pub fn get(&self, id: usize) -> Option<&Candidate> {
        self.candidates.get(id).filter(|c| c.id == id)
    }

    /// Take ownership of the candidate with the given id.
    pub fn take(mut self, id: usize) -> Option<Candidate> {
        if self.get(id).is_none() {
            return None;
        }
        Some(self.candidates.swap_remove(id))
    }

    /// Iterate over the candidates of one source, in production order.
    pub fn by_source(&self, source: Source) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(move |c| c.source == source)
    }

    /// Iterate over all candidates.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
