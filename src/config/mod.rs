// ABOUTME: Configuration module for plan extraction settings
// ABOUTME: Loads environment overrides, validates them, and exposes a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: defaults live in
//! `coach_plans_core::constants::defaults` and each value can be overridden by
//! a `PLAN_EXTRACTION_*` variable (see `coach_plans_core::constants::env_config`).

/// Configuration error types
pub mod error;

/// Extraction engine settings (day vocabulary, fallbacks, thresholds)
pub mod extraction;

pub use error::ConfigError;
pub use extraction::ExtractionConfig;
