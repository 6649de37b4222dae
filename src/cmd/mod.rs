// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   bridge (usage, test-logging, add), clone, config (options, inis)
//! ```

pub mod bridge;
pub mod clone;
pub mod config;

use serde::Serialize;

use crate::error::Result;
use crate::types::to_json;

/// Print a result record as JSON on stdout.
///
/// # Errors
///
/// Returns an error if the record cannot be serialised.
pub fn print_json<T: Serialize>(record: &T) -> Result<()> {
    println!("{}", to_json(record)?);
    Ok(())
}
