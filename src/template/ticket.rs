// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ticket identifier extraction from branch names.

use crate::error::{ConfigError, KommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Default branch pattern: `<prefix>/<optional KEY->digits`.
pub const DEFAULT_TICKET_PATTERN: &str = r"^\w+/((?:\w+?-)?\d+)";

lazy_static! {
    static ref DEFAULT_TICKET_REGEX: Regex = Regex::new(DEFAULT_TICKET_PATTERN).unwrap();
}

/// Extracts ticket identifiers from branch names.
#[derive(Debug, Clone)]
pub struct TicketExtractor {
    pattern: Regex,
}

impl Default for TicketExtractor {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TICKET_REGEX.clone(),
        }
    }
}

impl TicketExtractor {
    /// Create an extractor from a custom pattern. Capture group 1 is the ticket.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            KommitError::Config(ConfigError::InvalidValue {
                key: "ticket.pattern".to_string(),
                message: e.to_string(),
            })
        })?;

        if pattern.captures_len() < 2 {
            return Err(KommitError::Config(ConfigError::InvalidValue {
                key: "ticket.pattern".to_string(),
                message: "pattern needs a capture group for the ticket".to_string(),
            }));
        }

        Ok(Self { pattern })
    }

    /// Extract the ticket identifier from a branch name, if any.
    pub fn extract(&self, branch: &str) -> Option<String> {
        self.pattern
            .captures(branch.trim())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Extract a ticket identifier using the default pattern.
pub fn extract_ticket(branch: &str) -> Option<String> {
    TicketExtractor::default().extract(branch)
}
