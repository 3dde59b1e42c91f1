// ABOUTME: Plan type classification result and combined extraction summary
// ABOUTME: PlanType routes callers to extractors; CoachPlans bundles both plan kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MealPlanDay, WorkoutEntry};

/// Kind of plan detected in a coach response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Only a meal plan
    Meal,
    /// Only a workout plan
    Workout,
    /// Both a meal plan and a workout plan
    Both,
    /// No recognisable plan
    #[default]
    None,
}

impl PlanType {
    /// Combine the two whole-text signals into a classification
    #[must_use]
    pub const fn from_signals(has_meal: bool, has_workout: bool) -> Self {
        match (has_meal, has_workout) {
            (true, true) => Self::Both,
            (true, false) => Self::Meal,
            (false, true) => Self::Workout,
            (false, false) => Self::None,
        }
    }

    /// Whether the meal plan extractor should run
    #[must_use]
    pub const fn includes_meal(&self) -> bool {
        matches!(self, Self::Meal | Self::Both)
    }

    /// Whether the workout plan extractor should run
    #[must_use]
    pub const fn includes_workout(&self) -> bool {
        matches!(self, Self::Workout | Self::Both)
    }

    /// String literal handed to callers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Workout => "workout",
            Self::Both => "both",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification plus whichever plans it routed to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachPlans {
    /// Whole-text classification
    pub plan_type: PlanType,
    /// Extracted meal plan (empty unless `plan_type` includes meals)
    pub meal_plan: Vec<MealPlanDay>,
    /// Extracted workout plan (empty unless `plan_type` includes workouts)
    pub workout_plan: Vec<WorkoutEntry>,
}

impl CoachPlans {
    /// Whether no plan records were extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meal_plan.is_empty() && self.workout_plan.is_empty()
    }
}
