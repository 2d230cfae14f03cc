// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::template::Source;

/// Kommit - pick a commit message seed, edit it, commit it
///
/// Offers templates, recent log subjects and reflog commit messages in a
/// fuzzy finder, then opens the chosen seed in your editor.
#[derive(Parser, Debug)]
#[command(name = "kommit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Interactive commit message composer", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to compose if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KOMMIT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered finder lines (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Candidate sources selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListSource {
    /// Built-in and configured templates
    Static,
    /// Recent log subjects
    Log,
    /// Reflog commit messages
    Reflog,
    /// Every source, in id order
    #[default]
    All,
}

impl ListSource {
    /// The candidate sources covered.
    pub fn sources(&self) -> &'static [Source] {
        match self {
            ListSource::Static => &[Source::Static],
            ListSource::Log => &[Source::Log],
            ListSource::Reflog => &[Source::Reflog],
            ListSource::All => Source::all(),
        }
    }

    /// Whether history has to be read.
    pub fn needs_history(&self) -> bool {
        !matches!(self, ListSource::Static)
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Select, edit and commit a message (default command)
    Compose(ComposeArgs),

    /// Print the candidates without starting the finder
    List(ListArgs),

    /// Initialize kommit configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the compose command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ComposeArgs {
    /// Print the message instead of committing
    #[arg(long)]
    pub dry_run: bool,

    /// Branch name used for ticket extraction
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ListArgs {
    /// Which candidates to print
    #[arg(short, long, value_enum, default_value_t = ListSource::All)]
    pub source: ListSource,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Branch name used for ticket extraction
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Compose if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Compose(ComposeArgs::default()))
    }
}
