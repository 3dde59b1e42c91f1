// ABOUTME: Plan extraction configuration with environment overrides and validation
// ABOUTME: Holds the injected weekday vocabulary and the name/duration fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Extraction Configuration
//!
//! The weekday table is configuration rather than a hard-coded constant so a
//! deployment (or a test) can substitute another day vocabulary. Everything
//! else here tunes the fallbacks applied when a line is only partially
//! recognised.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

use coach_plans_core::constants::{defaults, env_config, keywords};

use super::ConfigError;

/// Global configuration singleton
static EXTRACTION_CONFIG: OnceLock<ExtractionConfig> = OnceLock::new();

/// Number of entries a day vocabulary must have
pub const DAYS_PER_WEEK: usize = 7;

/// Settings for the plan extraction engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Lower-case weekday names in scan order
    pub weekdays: Vec<String>,
    /// Workout duration when neither a duration nor sets/reps were found (minutes)
    pub default_duration_minutes: u32,
    /// Minimum characters for a reconstructed name to be kept
    pub min_name_chars: usize,
    /// Meal name used when reconstruction leaves too little text
    pub fallback_meal_name: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            weekdays: keywords::DEFAULT_WEEKDAYS
                .iter()
                .map(|day| (*day).to_owned())
                .collect(),
            default_duration_minutes: defaults::DEFAULT_WORKOUT_DURATION_MINUTES,
            min_name_chars: defaults::MIN_NAME_CHARS,
            fallback_meal_name: defaults::FALLBACK_MEAL_NAME.to_owned(),
        }
    }
}

impl ExtractionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        EXTRACTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load extraction config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration with a custom weekday vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if the vocabulary is not seven distinct, non-empty names
    pub fn with_weekdays<I, S>(mut self, weekdays: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.weekdays = normalize_weekdays(weekdays);
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weekdays.len() != DAYS_PER_WEEK {
            return Err(ConfigError::InvalidVocabulary(format!(
                "expected {DAYS_PER_WEEK} weekday names, got {}",
                self.weekdays.len()
            )));
        }

        if self.weekdays.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidVocabulary(
                "weekday names must not be empty".to_owned(),
            ));
        }

        let distinct: HashSet<&str> = self.weekdays.iter().map(String::as_str).collect();
        if distinct.len() != self.weekdays.len() {
            return Err(ConfigError::InvalidVocabulary(
                "weekday names must be distinct".to_owned(),
            ));
        }

        if self.min_name_chars == 0 {
            return Err(ConfigError::ValueOutOfRange("min_name_chars must be >= 1"));
        }

        if self.fallback_meal_name.trim().is_empty() {
            return Err(ConfigError::MissingField("fallback_meal_name"));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(raw) = env::var(env_config::WEEKDAYS) {
            self.weekdays = normalize_weekdays(raw.split(','));
        }

        Self::apply_env_var(
            env_config::DEFAULT_DURATION_MINUTES,
            &mut self.default_duration_minutes,
        )?;
        Self::apply_env_var(env_config::MIN_NAME_CHARS, &mut self.min_name_chars)?;

        if let Ok(name) = env::var(env_config::FALLBACK_MEAL_NAME) {
            name.trim().clone_into(&mut self.fallback_meal_name);
        }

        Ok(self)
    }
}

/// Trim and lower-case weekday names so matching can run on folded text
fn normalize_weekdays<I, S>(weekdays: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    weekdays
        .into_iter()
        .map(|day| day.as_ref().trim().to_lowercase())
        .collect()
}
