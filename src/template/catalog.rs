// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Static template catalog.
//!
//! Expands the configured base templates into the static candidate list.
//! Templates containing [`COMMIT_TYPE`] are expanded once per commit type;
//! templates containing [`TICKET_NUMBER`] only survive when a ticket was
//! extracted, and the others only survive when none was, unless flagged
//! `always`.

use crate::config::{CatalogConfig, TemplateSpec};

use super::candidate::{Candidate, Source};

/// Placeholder replaced by each commit type.
pub const COMMIT_TYPE: &str = "{commitType}";

/// Placeholder replaced by the ticket identifier.
pub const TICKET_NUMBER: &str = "{ticketNumber}";

/// Builder for the static candidates.
pub struct TemplateCatalog<'a> {
    templates: &'a [TemplateSpec],
    commit_types: &'a [String],
}

/// A template after commit-type expansion, before ticket filtering.
struct Expanded<'a> {
    base: &'a TemplateSpec,
    content: String,
    keywords: Vec<String>,
}

impl<'a> TemplateCatalog<'a> {
    /// Create a catalog over the configured templates and commit types.
    pub fn new(config: &'a CatalogConfig) -> Self {
        Self {
            templates: &config.templates,
            commit_types: &config.commit_types,
        }
    }

    /// Create a catalog from explicit template and commit-type lists.
    pub fn from_parts(templates: &'a [TemplateSpec], commit_types: &'a [String]) -> Self {
        Self {
            templates,
            commit_types,
        }
    }

    /// Build the static candidates for an optional ticket identifier.
    pub fn build(&self, ticket: Option<&str>) -> Vec<Candidate> {
        let plain = self
            .templates
            .iter()
            .filter(|t| !t.content.contains(COMMIT_TYPE))
            .map(|base| Expanded {
                base,
                content: base.content.clone(),
                keywords: base.keywords.clone(),
            });

        let typed = self
            .templates
            .iter()
            .filter(|t| t.content.contains(COMMIT_TYPE))
            .flat_map(|base| {
                self.commit_types.iter().map(move |commit_type| Expanded {
                    base,
                    content: base.content.replace(COMMIT_TYPE, commit_type),
                    keywords: std::iter::once(commit_type.clone())
                        .chain(base.keywords.iter().cloned())
                        .collect(),
                })
            });

        let has_ticket = ticket.is_some();

        let candidates: Vec<Candidate> = plain
            .chain(typed)
            .filter(|t| t.content.contains(TICKET_NUMBER) == has_ticket || t.base.always)
            .enumerate()
            .map(|(id, t)| {
                let content = match ticket {
                    Some(ticket) => t.content.replace(TICKET_NUMBER, ticket),
                    None => t.content,
                };
                Candidate::new(id, content, t.keywords, Source::Static)
                    .with_edit_hint(t.base.edit.clone())
            })
            .collect();

        tracing::debug!(
            "Built {} static templates (ticket: {:?})",
            candidates.len(),
            ticket
        );

        candidates
    }
}
