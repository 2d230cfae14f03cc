// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Kommit - Interactive commit message composer
//!
//! Offers commit-message seeds from three catalogs in a fuzzy finder and
//! turns the chosen one into a commit after an editor pass.
//!
//! # Features
//!
//! - **Template Catalog**: Conventional templates expanded per commit type,
//!   with the ticket number taken from the branch name
//! - **History Seeds**: Subjects from the log and commit messages from the reflog
//! - **Finder Integration**: Fixed-width rendering and key bindings that swap catalogs
//! - **Editor Pass**: Pre-filled message with the staged changes as comments
//!
//! # Example
//!
//! ```no_run
//! use kommit::compose::build_candidates;
//! use kommit::git::HistoryText;
//! use kommit::KommitConfig;
//!
//! let config = KommitConfig::load().unwrap();
//! let candidates =
//!     build_candidates(&config, Some("feat/JIRA-42-thing"), &HistoryText::default()).unwrap();
//!
//! for candidate in candidates.iter() {
//!     println!("{} {}", candidate.id, candidate.content);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod finder;
pub mod git;
pub mod template;

// Re-exports for convenience
pub use config::KommitConfig;
pub use error::{KommitError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of kommit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
