// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Candidate generation.
//!
//! This module builds the commit-message seeds offered for selection: the
//! static template catalog, parsed log entries and parsed reflog entries.

pub mod candidate;
pub mod catalog;
pub mod history;
pub mod ticket;

pub use candidate::{Candidate, CandidateSet, EditHint, InsertMode, Source};
pub use catalog::{TemplateCatalog, COMMIT_TYPE, TICKET_NUMBER};
pub use history::{parse_log, parse_reflog, LOG_FORMAT};
pub use ticket::{extract_ticket, TicketExtractor};
