// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compose module.
//!
//! Turns a selected candidate into a commit: pre-fills the editor with the
//! candidate and the staged changes, cleans the result and commits it.

mod composer;
mod editor;
mod prefill;
mod workspace;

pub use composer::{build_candidates, ComposeOptions, ComposeOutcome, Composer};
pub use editor::{clean_message, EditorCommand};
pub use prefill::{prefill_text, COMMENT_PREFIX};
pub use workspace::Workspace;
