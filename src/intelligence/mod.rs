// ABOUTME: Intelligence module for turning coach responses into structured plans
// ABOUTME: Re-exports the plan extraction engine and its free-function entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Heuristic analysis of free-text coach responses.

/// Meal plan, workout plan, and plan type extraction
pub mod plan_extraction;

pub use plan_extraction::{
    classify_plan_type, extract_coach_plans, extract_meal_plan, extract_workout_plan,
    group_workouts_by_day, DayVocabulary, MealPlanExtractor, PlanExtractor, PlanSignals,
    PlanTypeClassifier, StoredPlan, WorkoutPlanExtractor,
};
