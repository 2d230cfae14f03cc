// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-run temporary workspace.
//!
//! Holds the rendered candidate blocks read by the finder's reload bindings
//! and the message file opened in the editor. The directory is removed when
//! the workspace is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{ResultExt, Result};
use crate::finder::{BlockFiles, LineRenderer};
use crate::template::{CandidateSet, Source};

/// Name of the message file inside the workspace.
const MESSAGE_FILE: &str = "COMMIT_EDITMSG";

/// Temporary directory owned by one run.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("kommit")
            .tempdir()
            .context("workspace")?;
        tracing::debug!("Created workspace at {:?}", dir.path());
        Ok(Self { dir })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the message file.
    pub fn message_path(&self) -> PathBuf {
        self.dir.path().join(MESSAGE_FILE)
    }

    /// Render every source into its own block file.
    pub fn write_blocks(&self, renderer: &LineRenderer, set: &CandidateSet) -> Result<BlockFiles> {
        let files = BlockFiles {
            static_templates: self.dir.path().join("static"),
            log: self.dir.path().join("log"),
            reflog: self.dir.path().join("reflog"),
        };

        for source in Source::all() {
            let block = renderer.render_block(set, *source);
            fs::write(files.path(*source), block)?;
        }

        Ok(files)
    }

    /// Write the message file and return its path.
    pub fn write_message(&self, content: &str) -> Result<PathBuf> {
        let path = self.message_path();
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Remove the workspace, reporting failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        self.dir.close().context("workspace cleanup")
    }
}
