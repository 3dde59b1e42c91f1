// ABOUTME: Plan record models produced by coach response extraction
// ABOUTME: Re-exports meal plan, workout plan, and plan type classification types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Models
//!
//! Records are created fresh by every extraction call and owned by the caller.
//! Their serialized shape is the persisted contract read back by planner and
//! diary screens, so field names and optionality must not drift:
//!
//! - `MealPlanDay`: `day` plus up to four optional `MealEntry` slots
//! - `WorkoutEntry`: flat exercise record carrying its own day tag
//! - `PlanType`: transient routing decision (`meal`, `workout`, `both`, `none`)

mod meal_plan;
mod plan_type;
mod workout_plan;

pub use meal_plan::{MealEntry, MealPlanDay, MealSlot};
pub use plan_type::{CoachPlans, PlanType};
pub use workout_plan::{WorkoutDay, WorkoutEntry, WorkoutType};
