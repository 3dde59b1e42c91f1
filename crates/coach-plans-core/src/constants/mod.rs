// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Keyword tables, extraction defaults, and storage keys for plan extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.
//! Keyword tables are lower-case; matching code folds case before lookup.

/// Keyword vocabularies used by the line classifiers and plan type classifier
pub mod keywords;

/// Fixed identifiers for persisted plan records
pub mod storage;

/// Extraction defaults (overridable via environment configuration)
pub mod defaults {
    /// Workout duration in minutes when neither a duration nor sets/reps were found
    pub const DEFAULT_WORKOUT_DURATION_MINUTES: u32 = 30;
    /// Workout duration in minutes when sets or reps were found without a duration
    pub const SET_BASED_WORKOUT_DURATION_MINUTES: u32 = 0;
    /// Minimum character count for a reconstructed meal or exercise name
    pub const MIN_NAME_CHARS: usize = 3;
    /// Name used for a meal slot whose description could not be reconstructed
    pub const FALLBACK_MEAL_NAME: &str = "Meal";
    /// Day number of the synthetic day opened when meals appear before any day marker
    pub const IMPLICIT_FIRST_DAY_NUMBER: u32 = 1;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the plan extraction command-line tool
    pub const COACH_PLANS: &str = "coach-plans";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Comma-separated override of the seven weekday names
    pub const WEEKDAYS: &str = "PLAN_EXTRACTION_WEEKDAYS";
    /// Override of the default workout duration (minutes)
    pub const DEFAULT_DURATION_MINUTES: &str = "PLAN_EXTRACTION_DEFAULT_DURATION_MINUTES";
    /// Override of the minimum reconstructed name length
    pub const MIN_NAME_CHARS: &str = "PLAN_EXTRACTION_MIN_NAME_CHARS";
    /// Override of the fallback meal name
    pub const FALLBACK_MEAL_NAME: &str = "PLAN_EXTRACTION_FALLBACK_MEAL_NAME";
}
