// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for kommit.
//!
//! This module handles locating, parsing and validating configuration.
//! Everything has a built-in default, so no file is required.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
