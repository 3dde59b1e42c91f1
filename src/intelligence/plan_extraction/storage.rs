// ABOUTME: Persisted plan envelope keyed by the fixed storage identifiers
// ABOUTME: Serializes meal and workout plans verbatim and reads them back by key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use coach_plans_core::constants::storage::{
    MEAL_PLAN_STORAGE_KEY, PLAN_STORAGE_KEYS, WORKOUT_PLAN_STORAGE_KEY,
};
use coach_plans_core::models::{MealPlanDay, WorkoutEntry};

use crate::errors::{AppError, AppResult};

/// A plan as written to, and read back from, key/value storage
///
/// The JSON body is the bare list; the variant only selects the key, so
/// reading back goes through [`StoredPlan::from_json`] rather than serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredPlan {
    /// Stored under [`MEAL_PLAN_STORAGE_KEY`]
    Meal(Vec<MealPlanDay>),
    /// Stored under [`WORKOUT_PLAN_STORAGE_KEY`]
    Workout(Vec<WorkoutEntry>),
}

impl StoredPlan {
    /// Storage key for this plan kind
    #[must_use]
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Self::Meal(_) => MEAL_PLAN_STORAGE_KEY,
            Self::Workout(_) => WORKOUT_PLAN_STORAGE_KEY,
        }
    }

    /// Reject anything but a known storage key
    ///
    /// # Errors
    ///
    /// Returns an invalid input error naming the unknown key
    pub fn check_key(key: &str) -> AppResult<()> {
        if PLAN_STORAGE_KEYS.contains(&key) {
            Ok(())
        } else {
            Err(unknown_key(key))
        }
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Meal(days) => days.len(),
            Self::Workout(entries) => entries.len(),
        }
    }

    /// Whether the stored list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the bare list
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the records cannot be encoded
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a stored list back, using `key` to pick the record shape
    ///
    /// # Errors
    ///
    /// Returns an invalid input error for an unknown key, or a serialization
    /// error if the body does not match the shape for that key
    pub fn from_json(key: &str, json: &str) -> AppResult<Self> {
        match key {
            MEAL_PLAN_STORAGE_KEY => Ok(Self::Meal(serde_json::from_str(json)?)),
            WORKOUT_PLAN_STORAGE_KEY => Ok(Self::Workout(serde_json::from_str(json)?)),
            other => Err(unknown_key(other)),
        }
    }
}

fn unknown_key(key: &str) -> AppError {
    AppError::invalid_input(format!(
        "Unknown plan storage key '{key}', expected one of {}",
        PLAN_STORAGE_KEYS.join(", ")
    ))
    .with_resource_id(key)
}
