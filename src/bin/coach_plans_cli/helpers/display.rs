// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for coach-plans
// ABOUTME: Writes formatted plans to stdout and store summaries to stderr

use serde::Serialize;
use std::path::Path;

use coach_plans::errors::AppResult;
use coach_plans::formatters::{format_output, OutputFormat};

/// Print `data` to stdout in `format`
pub fn print_formatted<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<()> {
    println!("{}", format_output(data, format)?);
    Ok(())
}

/// Report a stored plan file on stderr, keeping stdout clean for piping
pub fn display_stored(key: &str, records: usize, path: &Path) {
    eprintln!("Stored {records} record(s) under '{key}' -> {}", path.display());
}

/// Report that a response held nothing worth storing
pub fn display_nothing_stored() {
    eprintln!("No plan found in response; nothing stored");
}
