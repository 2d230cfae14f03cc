// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::KommitConfig;

/// Get the default configuration.
pub fn default_config() -> KommitConfig {
    KommitConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# kommit configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Static templates. `{commitType}` expands once per commit type,
# `{ticketNumber}` templates only show up on ticket branches.
[catalog]
commit_types = ["feat", "fix", "chore", "test", "build", "docs", "ci", "refactor", "perf", "revert", "style"]

[[catalog.templates]]
content = "{commitType}({ticketNumber}): "
keywords = ["scoped"]
edit = { insert = "line-end" }

[[catalog.templates]]
content = "{ticketNumber} - "
keywords = ["plain"]
edit = { insert = "line-end" }

[[catalog.templates]]
content = "{commitType}: "
keywords = ["plain"]
edit = { insert = "line-end" }

[[catalog.templates]]
content = "{commitType}(<scope>): "
keywords = ["scoped"]
edit = { normal = ["da>"], insert = "cursor" }

[[catalog.templates]]
content = "--wip-- [skip ci]"
keywords = ["wip"]
always = true

# Branch pattern, capture group 1 is the ticket
[ticket]
pattern = '^\w+/((?:\w+?-)?\d+)'

[finder]
program = "fzf"
prompt = "=> "
height = "~100%"
content_width = 60
keywords_width = 75

[[finder.bindings]]
key = "ctrl-d"
source = "static"

[[finder.bindings]]
key = "ctrl-l"
source = "log"

[[finder.bindings]]
key = "ctrl-r"
source = "reflog"

# Falls back to nvim, then vim
[editor]
# command = "nvim"
args = []

[history]
max_count = 0

[commit]
no_verify = true
"#
}
