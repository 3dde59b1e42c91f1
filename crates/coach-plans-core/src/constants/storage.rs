// ABOUTME: Storage keys under which extracted plans are persisted by client applications
// ABOUTME: Shared so planner and diary screens read back the same identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Key for the serialized `Vec<MealPlanDay>` produced by the meal plan extractor
pub const MEAL_PLAN_STORAGE_KEY: &str = "coach_meal_plan";

/// Key for the serialized `Vec<WorkoutEntry>` produced by the workout plan extractor
pub const WORKOUT_PLAN_STORAGE_KEY: &str = "coach_workout_plan";

/// Every key a stored plan may live under
pub const PLAN_STORAGE_KEYS: [&str; 2] = [MEAL_PLAN_STORAGE_KEY, WORKOUT_PLAN_STORAGE_KEY];
