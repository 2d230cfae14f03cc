// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from kommit.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, KommitError, Result};
use crate::template::{EditHint, InsertMode, Source, TICKET_NUMBER};

/// The main configuration structure for kommit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KommitConfig {
    /// Static template catalog.
    pub catalog: CatalogConfig,

    /// Ticket extraction.
    pub ticket: TicketConfig,

    /// Interactive finder.
    pub finder: FinderConfig,

    /// Editor session.
    pub editor: EditorConfig,

    /// History queries.
    pub history: HistoryConfig,

    /// Commit submission.
    pub commit: CommitConfig,
}

impl KommitConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        crate::template::TicketExtractor::new(&self.ticket.pattern)?;
        self.finder.validate()
    }
}

fn invalid(key: &str, message: impl Into<String>) -> KommitError {
    KommitError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    })
}

/// Static template catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Commit types substituted into `{commitType}`, in display order.
    pub commit_types: Vec<String>,

    /// Base templates, in display order.
    pub templates: Vec<TemplateSpec>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            commit_types: [
                "feat", "fix", "chore", "test", "build", "docs", "ci", "refactor", "perf",
                "revert", "style",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            templates: vec![
                TemplateSpec::new("{commitType}({ticketNumber}): ", "scoped")
                    .with_edit(EditHint::insert_at_end()),
                TemplateSpec::new("{ticketNumber} - ", "plain")
                    .with_edit(EditHint::insert_at_end()),
                TemplateSpec::new("{commitType}: ", "plain").with_edit(EditHint::insert_at_end()),
                TemplateSpec::new("{commitType}(<scope>): ", "scoped").with_edit(EditHint {
                    normal: vec!["da>".to_string()],
                    insert: Some(InsertMode::Cursor),
                }),
                // Same marker as oh-my-zsh's gwip alias
                TemplateSpec::new("--wip-- [skip ci]", "wip").always(),
            ],
        }
    }
}

impl CatalogConfig {
    fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(invalid("catalog.templates", "at least one template is required"));
        }
        if self.templates.iter().any(|t| t.content.trim().is_empty()) {
            return Err(invalid("catalog.templates", "template content cannot be empty"));
        }
        if self.templates.iter().all(|t| t.content.contains(TICKET_NUMBER)) {
            return Err(invalid(
                "catalog.templates",
                "at least one template must work without a ticket number",
            ));
        }
        if self.commit_types.iter().any(|t| t.trim().is_empty()) {
            return Err(invalid("catalog.commit_types", "commit types cannot be empty"));
        }
        Ok(())
    }
}

/// A base template before expansion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateSpec {
    /// Template text with optional `{commitType}` / `{ticketNumber}` placeholders.
    pub content: String,

    /// Base keywords.
    pub keywords: Vec<String>,

    /// Keep regardless of ticket presence.
    pub always: bool,

    /// Editor directives.
    pub edit: Option<EditHint>,
}

impl TemplateSpec {
    /// Create a template with a single keyword.
    pub fn new(content: &str, keyword: &str) -> Self {
        Self {
            content: content.to_string(),
            keywords: vec![keyword.to_string()],
            always: false,
            edit: None,
        }
    }

    /// Set the editor directives.
    pub fn with_edit(mut self, edit: EditHint) -> Self {
        self.edit = Some(edit);
        self
    }

    /// Mark as always included.
    pub fn always(mut self) -> Self {
        self.always = true;
        self
    }
}

/// Ticket extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    /// Branch pattern; capture group 1 is the ticket identifier.
    pub pattern: String,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            pattern: crate::template::ticket::DEFAULT_TICKET_PATTERN.to_string(),
        }
    }
}

/// Interactive finder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Finder executable.
    pub program: String,

    /// Prompt string.
    pub prompt: String,

    /// Height of the finder window.
    pub height: String,

    /// Width of the content column.
    pub content_width: usize,

    /// Width of the keywords column.
    pub keywords_width: usize,

    /// `--color` entries.
    pub colors: Vec<String>,

    /// Key chords that swap the displayed candidate block.
    pub bindings: Vec<ReloadBinding>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            program: "fzf".to_string(),
            prompt: "=> ".to_string(),
            height: "~100%".to_string(),
            content_width: crate::finder::CONTENT_WIDTH,
            keywords_width: crate::finder::KEYWORDS_WIDTH,
            colors: [
                "bg+:#262626",
                "bg:#121212",
                "fg+:#d0d0d0",
                "fg:#d0d0d0",
                "header:#87afaf",
                "hl+:#5fd7ff",
                "hl:#5f87af",
                "info:#afaf87",
                "marker:#87ff00",
                "pointer:#af5fff",
                "prompt:#d7005f",
                "spinner:#af5fff",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            bindings: vec![
                ReloadBinding::new("ctrl-d", Source::Static),
                ReloadBinding::new("ctrl-l", Source::Log),
                ReloadBinding::new("ctrl-r", Source::Reflog),
            ],
        }
    }
}

impl FinderConfig {
    fn validate(&self) -> Result<()> {
        // Truncation keeps `width - 3` characters plus the dots
        if self.content_width < 4 || self.keywords_width < 4 {
            return Err(invalid("finder", "column widths must be at least 4"));
        }
        for binding in &self.bindings {
            if binding.key.trim().is_empty() || binding.key.contains(':') {
                return Err(invalid(
                    "finder.bindings",
                    format!("invalid key chord '{}'", binding.key),
                ));
            }
        }
        Ok(())
    }
}

/// A key chord mapped to a candidate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadBinding {
    /// Key chord in finder syntax, e.g. `ctrl-l`.
    pub key: String,

    /// Block shown when the chord is pressed.
    pub source: Source,
}

impl ReloadBinding {
    /// Create a binding.
    pub fn new(key: &str, source: Source) -> Self {
        Self {
            key: key.to_string(),
            source,
        }
    }
}

/// Editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor executable; nvim or vim when unset.
    pub command: Option<String>,

    /// Extra arguments placed before the file path.
    pub args: Vec<String>,
}

/// History query configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of log entries (0 means unlimited).
    pub max_count: usize,
}

/// Commit submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Skip commit hooks.
    pub no_verify: bool,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self { no_verify: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KommitConfig::default();
        assert_eq!(config.catalog.commit_types.len(), 11);
        assert_eq!(config.catalog.templates.len(), 5);
        assert_eq!(config.finder.program, "fzf");
        assert_eq!(config.finder.bindings.len(), 3);
        assert!(config.commit.no_verify);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_only_wip_is_always() {
        let config = CatalogConfig::default();
        let always: Vec<&str> = config
            .templates
            .iter()
            .filter(|t| t.always)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(always, vec!["--wip-- [skip ci]"]);
    }

    #[test]
    fn test_catalog_needs_ticketless_template() {
        let mut config = KommitConfig::default();
        config.catalog.templates = vec![TemplateSpec::new("{ticketNumber} - ", "plain")];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_narrow_columns_rejected() {
        let mut config = KommitConfig::default();
        config.finder.content_width = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_binding_key_with_colon_rejected() {
        let mut config = KommitConfig::default();
        config.finder.bindings.push(ReloadBinding::new("ctrl-x:abort", Source::Log));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = KommitConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("commit_types"));
        assert!(toml_str.contains("ctrl-l"));
    }
}
