// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Finder arguments and reload bindings.

use std::path::{Path, PathBuf};

use crate::config::{FinderConfig, ReloadBinding};
use crate::error::{Result, ResultExt};
use crate::template::Source;

use super::render::DELIMITER;

/// Files holding the rendered block of each source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFiles {
    pub static_templates: PathBuf,
    pub log: PathBuf,
    pub reflog: PathBuf,
}

impl BlockFiles {
    /// Get the file for a source.
    pub fn path(&self, source: Source) -> &Path {
        match source {
            Source::Static => &self.static_templates,
            Source::Log => &self.log,
            Source::Reflog => &self.reflog,
        }
    }
}

/// Session settings for the finder.
#[derive(Debug, Clone)]
pub struct FinderOptions {
    /// Prompt string.
    pub prompt: String,
    /// Window height.
    pub height: String,
    /// `--color` entries.
    pub colors: Vec<String>,
    /// Key chord to block mapping.
    pub bindings: Vec<ReloadBinding>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self::from_config(&FinderConfig::default())
    }
}

impl FinderOptions {
    /// Build options from configuration.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            height: config.height.clone(),
            colors: config.colors.clone(),
            bindings: config.bindings.clone(),
        }
    }

    /// Render the reload bindings as `--bind` values.
    ///
    /// The block path is quoted for the shell the finder runs `reload` in.
    pub fn bind_values(&self, files: &BlockFiles) -> Result<Vec<String>> {
        self.bindings
            .iter()
            .map(|b| {
                let path = files.path(b.source).to_string_lossy();
                let quoted = shlex::try_quote(&path).context("finder binding")?;
                Ok(format!("{}:reload(cat {})", b.key, quoted))
            })
            .collect()
    }

    /// Full argument list for one session.
    ///
    /// Matching is exact and case-sensitive over the content and keywords
    /// columns; the id column is hidden and only the id is printed back.
    pub fn args(&self, header: &str, files: &BlockFiles) -> Result<Vec<String>> {
        let mut args: Vec<String> = [
            "--border",
            "--exact",
            "--highlight-line",
            "--no-ignore-case",
            "--no-sort",
            "--reverse",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let pairs = [
            ("--accept-nth", "1"),
            ("--delimiter", DELIMITER),
            ("--header", header),
            ("--height", self.height.as_str()),
            ("--nth", "2..3"),
            ("--prompt", self.prompt.as_str()),
            ("--with-nth", "2..4"),
        ];
        for (flag, value) in pairs {
            args.push(flag.to_string());
            args.push(value.to_string());
        }

        for bind in self.bind_values(files)? {
            args.push("--bind".to_string());
            args.push(bind);
        }

        for color in &self.colors {
            args.push("--color".to_string());
            args.push(color.clone());
        }

        Ok(args)
    }
}
