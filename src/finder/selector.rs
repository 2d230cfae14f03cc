// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive selection session.
//!
//! The finder runs in the foreground: it draws on the terminal, reads the
//! static block from stdin, swaps blocks itself through its reload bindings
//! and prints the accepted id on stdout. The caller is suspended until it
//! exits.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::FinderConfig;
use crate::error::{FinderError, KommitError, Result};
use crate::template::Source;

use super::options::{BlockFiles, FinderOptions};
use super::render::DELIMITER;

/// Exit status for "no match".
const EXIT_NO_MATCH: i32 = 1;

/// Exit status for an interrupted session (ctrl-c / esc).
const EXIT_INTERRUPTED: i32 = 130;

/// One finder invocation.
#[derive(Debug)]
pub struct FinderInvocation<'a> {
    /// Finder executable.
    pub program: &'a str,
    /// Command-line arguments.
    pub args: &'a [String],
    /// File piped to the finder's stdin.
    pub input: &'a Path,
}

/// Result of a finished finder process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOutput {
    /// Exit code; `None` when killed by a signal.
    pub status: Option<i32>,
    /// Captured stdout.
    pub stdout: String,
}

/// Process boundary for the finder.
pub trait FinderProcess {
    /// Run the finder to completion.
    fn run(&self, invocation: &FinderInvocation<'_>) -> Result<FinderOutput>;
}

/// Runs the real finder executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FzfProcess;

impl FinderProcess for FzfProcess {
    fn run(&self, invocation: &FinderInvocation<'_>) -> Result<FinderOutput> {
        if which::which(invocation.program).is_err() {
            return Err(KommitError::Finder(FinderError::NotInstalled {
                program: invocation.program.to_string(),
            }));
        }

        let input = File::open(invocation.input)?;

        tracing::debug!(
            "Starting {} with {} arguments",
            invocation.program,
            invocation.args.len()
        );

        let output = Command::new(invocation.program)
            .args(invocation.args)
            .stdin(Stdio::from(input))
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                KommitError::Finder(FinderError::SpawnFailed {
                    program: invocation.program.to_string(),
                    message: e.to_string(),
                })
            })?;

        Ok(FinderOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

/// Outcome of a selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user accepted the candidate with this global id.
    Selected(usize),
    /// The user left without choosing.
    Aborted,
}

/// Drives a finder session over rendered candidate blocks.
pub struct Selector<P: FinderProcess = FzfProcess> {
    program: String,
    options: FinderOptions,
    process: P,
}

impl Selector<FzfProcess> {
    /// Create a selector for the real finder.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(&config.program, FinderOptions::from_config(config), FzfProcess)
    }
}

impl<P: FinderProcess> Selector<P> {
    /// Create a selector over a custom process boundary.
    pub fn new(program: &str, options: FinderOptions, process: P) -> Self {
        Self {
            program: program.to_string(),
            options,
            process,
        }
    }

    /// The process boundary.
    pub fn process(&self) -> &P {
        &self.process
    }

    /// Run one session, starting on the static block.
    pub fn select(&self, header: &str, files: &BlockFiles) -> Result<Selection> {
        let args = self.options.args(header, files)?;
        let invocation = FinderInvocation {
            program: &self.program,
            args: &args,
            input: files.path(Source::Static),
        };

        let output = self.process.run(&invocation)?;
        tracing::debug!("{} exited with {:?}", self.program, output.status);

        match output.status {
            Some(0) => parse_selection(&output.stdout).map(Selection::Selected),
            Some(EXIT_NO_MATCH) | Some(EXIT_INTERRUPTED) | None => Ok(Selection::Aborted),
            Some(status) => Err(KommitError::Finder(FinderError::Failed {
                program: self.program.clone(),
                status,
            })),
        }
    }
}

/// Parse the id from the finder's stdout.
///
/// Only the first field is used, so a full line works as well as the
/// accepted field alone.
pub fn parse_selection(stdout: &str) -> Result<usize> {
    let first_line = stdout.lines().next().unwrap_or("");
    let field = first_line.split(DELIMITER).next().unwrap_or("").trim();

    field.parse::<usize>().map_err(|_| {
        KommitError::Finder(FinderError::UnexpectedOutput {
            output: stdout.trim().to_string(),
        })
    })
}
