// ABOUTME: Output format abstraction for writing extracted plans
// ABOUTME: Supports compact JSON, pretty JSON, and TOON (token-efficient for LLMs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Extracted plans are handed back to a chat client or a language model. JSON
//! is the storage shape; TOON (Token-Oriented Object Notation) is offered for
//! feeding a plan back into a prompt and needs the `toon` feature.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, ErrorCode};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line JSON, the persisted shape
    #[default]
    Json,
    /// Indented JSON for reading in a terminal
    Pretty,
    /// TOON format for LLM prompts
    Toon,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Toon => "toon",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "toon" => Ok(Self::Toon),
            other => Err(FormatError {
                message: format!("unknown output format '{other}'"),
                format: Self::Json,
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.message.clone())
            .with_resource_id(error.format.as_str())
            .with_source(error)
    }
}

/// Serialize `data` in the requested format
///
/// # Errors
///
/// Returns `FormatError` if serialization fails, or if TOON output is
/// requested without the `toon` feature
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    let json_error = |e: serde_json::Error| FormatError {
        message: e.to_string(),
        format,
    };

    match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(json_error),
        OutputFormat::Pretty => serde_json::to_string_pretty(data).map_err(json_error),
        OutputFormat::Toon => encode_toon(data),
    }
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
