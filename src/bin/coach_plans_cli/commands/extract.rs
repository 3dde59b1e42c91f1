// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Extract command for coach-plans
// ABOUTME: Runs the meal and workout extractors, optionally grouping workouts by day

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use coach_plans::errors::AppResult;
use coach_plans::formatters::OutputFormat;
use coach_plans::intelligence::{group_workouts_by_day, PlanExtractor, StoredPlan};
use coach_plans::models::{MealPlanDay, PlanType, WorkoutDay};

use crate::helpers::{display::print_formatted, input::read_response};

/// Which plan the extract command produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKind {
    /// Follow the classification
    Auto,
    /// Meal plan only, regardless of classification
    Meal,
    /// Workout plan only, regardless of classification
    Workout,
}

/// Classified plans with workouts grouped by day
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupedPlans {
    plan_type: PlanType,
    meal_plan: Vec<MealPlanDay>,
    workout_days: Vec<WorkoutDay>,
}

/// Extract plans from the response read from `input`
pub fn run(
    extractor: &PlanExtractor,
    input: Option<&Path>,
    kind: PlanKind,
    format: OutputFormat,
    group_by_day: bool,
) -> AppResult<()> {
    let text = read_response(input)?;

    match kind {
        PlanKind::Auto => {
            let plans = extractor.extract(&text);
            info!(
                plan_type = %plans.plan_type,
                meal_days = plans.meal_plan.len(),
                workout_entries = plans.workout_plan.len(),
                "plans extracted"
            );

            if group_by_day {
                let grouped = GroupedPlans {
                    plan_type: plans.plan_type,
                    workout_days: group_workouts_by_day(&plans.workout_plan),
                    meal_plan: plans.meal_plan,
                };
                print_formatted(&grouped, format)
            } else {
                print_formatted(&plans, format)
            }
        }
        PlanKind::Meal => {
            print_formatted(&StoredPlan::Meal(extractor.extract_meal_plan(&text)), format)
        }
        PlanKind::Workout => {
            let entries = extractor.extract_workout_plan(&text);
            if group_by_day {
                print_formatted(&group_workouts_by_day(&entries), format)
            } else {
                print_formatted(&StoredPlan::Workout(entries), format)
            }
        }
    }
}
