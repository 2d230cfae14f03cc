// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end compose flow.

use crate::config::KommitConfig;
use crate::error::{FinderError, KommitError, NoInput, Result};
use crate::finder::{FinderProcess, FzfProcess, LineRenderer, Selection, Selector};
use crate::git::{create_commit, read_history, staged_changes, HistoryText, Repository};
use crate::template::{parse_log, parse_reflog, CandidateSet, TemplateCatalog, TicketExtractor};

use super::editor::EditorCommand;
use super::prefill::prefill_text;
use super::workspace::Workspace;

/// Options for a single compose run.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Print the message instead of committing.
    pub dry_run: bool,
    /// Branch name used for ticket extraction instead of the current one.
    pub branch: Option<String>,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// A commit was created.
    Committed {
        /// First line of git's output.
        summary: String,
        /// The committed message.
        message: String,
    },
    /// The message was composed but not committed.
    DryRun { message: String },
}

impl ComposeOutcome {
    /// The composed message.
    pub fn message(&self) -> &str {
        match self {
            ComposeOutcome::Committed { message, .. } => message,
            ComposeOutcome::DryRun { message } => message,
        }
    }
}

/// Build the full candidate set: static templates, then log, then reflog.
pub fn build_candidates(
    config: &KommitConfig,
    branch: Option<&str>,
    history: &HistoryText,
) -> Result<CandidateSet> {
    let extractor = TicketExtractor::new(&config.ticket.pattern)?;
    let ticket = branch.and_then(|b| extractor.extract(b));
    tracing::debug!("Ticket: {:?}", ticket);

    let templates = TemplateCatalog::new(&config.catalog).build(ticket.as_deref());

    Ok(CandidateSet::assemble(
        templates,
        parse_log(&history.log),
        parse_reflog(&history.reflog),
    ))
}

/// Runs the selection, editing and commit steps.
pub struct Composer<P: FinderProcess = FzfProcess> {
    config: KommitConfig,
    selector: Selector<P>,
}

impl Composer<FzfProcess> {
    /// Create a composer driving the configured finder.
    pub fn new(config: KommitConfig) -> Self {
        let selector = Selector::from_config(&config.finder);
        Self { config, selector }
    }
}

impl<P: FinderProcess> Composer<P> {
    /// Create a composer with a custom selector.
    pub fn with_selector(config: KommitConfig, selector: Selector<P>) -> Self {
        Self { config, selector }
    }

    /// Compose a message for the staged changes of `repo`.
    pub fn run(&self, repo: &Repository, options: &ComposeOptions) -> Result<ComposeOutcome> {
        if !repo.has_staged_changes()? {
            return Err(NoInput::NoStagedChanges.into());
        }

        let workdir = repo.workdir();
        let max_count = self.config.history.max_count;

        let (history, staged) = std::thread::scope(|s| {
            let history = s.spawn(|| read_history(workdir, max_count));
            let staged = staged_changes(repo);
            let history = history
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (history, staged)
        });
        let staged = staged?;
        tracing::info!("{} staged file(s)", staged.files.len());

        let branch = options.branch.clone().or_else(|| repo.branch_name());
        tracing::debug!("Branch: {:?}", branch);

        let editor = EditorCommand::resolve(&self.config.editor)?;
        let candidates = build_candidates(&self.config, branch.as_deref(), &history)?;
        tracing::debug!("{} candidates", candidates.len());

        let renderer = LineRenderer::new(
            self.config.finder.content_width,
            self.config.finder.keywords_width,
        );
        let workspace = Workspace::create()?;
        let files = workspace.write_blocks(&renderer, &candidates)?;

        let id = match self.selector.select(&renderer.header(), &files)? {
            Selection::Selected(id) => id,
            Selection::Aborted => return Err(NoInput::Aborted.into()),
        };

        let candidate = candidates
            .take(id)
            .ok_or(KommitError::Finder(FinderError::UnknownCandidate { id }))?;
        tracing::info!("Selected {} candidate {}", candidate.source, id);

        let path = workspace.write_message(&prefill_text(&candidate.content, &staged))?;
        let message = editor.edit(&path, candidate.edit_hint.as_ref())?;
        workspace.close()?;

        if options.dry_run {
            return Ok(ComposeOutcome::DryRun { message });
        }

        let summary = create_commit(workdir, &message, self.config.commit.no_verify)?;
        Ok(ComposeOutcome::Committed { summary, message })
    }
}
