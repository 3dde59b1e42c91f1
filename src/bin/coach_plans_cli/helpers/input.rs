// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input helpers for coach-plans
// ABOUTME: Reads a coach response from a file path or from stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use coach_plans::errors::{AppError, AppResult};

/// Read the response text from `path`, or stdin when it is absent or `-`
pub fn read_response(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string())),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
