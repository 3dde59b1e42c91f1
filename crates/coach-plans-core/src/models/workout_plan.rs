// ABOUTME: Workout plan records extracted from coach responses
// ABOUTME: Flat WorkoutEntry list with per-entry day tags and WorkoutDay grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Broad training category of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Endurance work; also the fallback when nothing else matches
    #[default]
    Cardio,
    /// Resistance training
    Strength,
    /// Mobility, stretching, yoga, pilates
    Flexibility,
    /// Ball and racket sports
    Sports,
}

/// A single exercise recognised in a coach response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// Exercise name, never empty
    pub name: String,
    /// Training category
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration: u32,
    /// Number of sets as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    /// Repetitions per set as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Load with unit, e.g. `60kg` or `135lbs`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Day label active when the line was scanned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Day index active when the line was scanned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
}

/// Exercises sharing the same day index, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Day index shared by the exercises (`None` for unscheduled exercises)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_number: Option<u32>,
    /// Day label of the first exercise in the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Exercises in source order
    pub exercises: Vec<WorkoutEntry>,
}
