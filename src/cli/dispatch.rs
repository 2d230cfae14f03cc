// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::compose::{build_candidates, ComposeOptions, ComposeOutcome, Composer};
use crate::config::KommitConfig;
use crate::error::{ConfigError, KommitError, Result};
use crate::finder::LineRenderer;
use crate::git::{read_history, HistoryText, Repository};

use super::args::{Cli, Commands, ComposeArgs, InitArgs, ListArgs, OutputFormat};

/// File written by `kommit init`.
const INIT_FILE: &str = "kommit.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Compose(args) => run_compose(&load_config(&cli)?, args),
        Commands::List(args) => run_list(&load_config(&cli)?, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

fn load_config(cli: &Cli) -> Result<KommitConfig> {
    if let Some(config_path) = &cli.config {
        KommitConfig::load_from(config_path)
    } else {
        KommitConfig::load()
    }
}

/// Run the compose command.
fn run_compose(config: &KommitConfig, args: ComposeArgs) -> Result<()> {
    tracing::debug!("Running compose command with args: {:?}", args);

    let repo = Repository::open_current()?;
    let options = ComposeOptions {
        dry_run: args.dry_run,
        branch: args.branch,
    };

    match Composer::new(config.clone()).run(&repo, &options)? {
        ComposeOutcome::DryRun { message } => {
            eprintln!("{} Would commit:", style("[dry-run]").yellow());
            println!("{}", message);
        }
        ComposeOutcome::Committed { summary, .. } => {
            println!("{} {}", style("✓").green().bold(), summary);
        }
    }

    Ok(())
}

/// Run the list command.
fn run_list(config: &KommitConfig, args: ListArgs) -> Result<()> {
    tracing::debug!("Running list command with args: {:?}", args);

    let needs_repo = args.source.needs_history() || args.branch.is_none();
    let repo = if needs_repo {
        Some(Repository::open_current()?)
    } else {
        None
    };

    let branch = args
        .branch
        .clone()
        .or_else(|| repo.as_ref().and_then(|r| r.branch_name()));

    let history = match repo {
        Some(ref repo) if args.source.needs_history() => {
            read_history(repo.workdir(), config.history.max_count)
        }
        _ => HistoryText::default(),
    };

    let candidates = build_candidates(config, branch.as_deref(), &history)?;
    let sources = args.source.sources();

    match args.format {
        OutputFormat::Text => {
            let renderer = LineRenderer::new(
                config.finder.content_width,
                config.finder.keywords_width,
            );
            println!("{}", renderer.header());
            for source in sources {
                for candidate in candidates.by_source(*source) {
                    println!("{}", renderer.render(candidate));
                }
            }
        }
        OutputFormat::Json => {
            let selected: Vec<_> = candidates
                .iter()
                .filter(|c| sources.contains(&c.source))
                .collect();
            let json = serde_json::to_string_pretty(&selected).map_err(|e| {
                KommitError::WithContext {
                    context: "list".to_string(),
                    message: format!("Failed to serialize candidates: {}", e),
                }
            })?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("kommit {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(INIT_FILE);

    if config_path.exists() && !args.force && !confirm_overwrite(config_path)? {
        println!("{}", style("Kept existing configuration").dim());
        return Ok(());
    }

    std::fs::write(config_path, example_config()).map_err(|e| KommitError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("{} Created {}", style("✓").green().bold(), INIT_FILE);

    Ok(())
}

/// Ask before overwriting; refuse outright without a terminal.
fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !console::Term::stderr().is_term() {
        return Err(KommitError::Config(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
