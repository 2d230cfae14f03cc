// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Finder integration.
//!
//! Renders candidates into fixed-width delimiter-separated lines and runs
//! the interactive finder over them.

pub mod options;
pub mod render;
pub mod selector;

pub use options::{BlockFiles, FinderOptions};
pub use render::{fit, LineRenderer, CONTENT_WIDTH, DELIMITER, KEYWORDS_WIDTH};
pub use selector::{
    parse_selection, FinderInvocation, FinderOutput, FinderProcess, FzfProcess, Selection,
    Selector,
};
