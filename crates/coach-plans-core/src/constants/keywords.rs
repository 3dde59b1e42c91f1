// ABOUTME: Keyword vocabularies for meal, exercise, and plan type recognition
// ABOUTME: Ordered tables; earlier entries take precedence wherever order matters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keyword tables used by the plan extraction heuristics.
//!
//! Exercise-related keywords match at the start of a word, so `squat` also
//! recognises `squats` and `push` recognises `push-ups`, while `row` does not
//! fire inside `tomorrow`.

/// Default weekday vocabulary in scan order (Monday first)
pub const DEFAULT_WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Meal slot keywords in slot order
pub const MEAL_SLOT_KEYWORDS: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

/// Body-part and training-category section headings
pub const CATEGORY_HEADERS: &[&str] = &[
    "upper body",
    "lower body",
    "cardio",
    "full body",
    "core",
    "legs",
    "chest",
    "back",
    "arms",
    "shoulders",
];

/// Keywords that make a line an exercise candidate, also the order used for name fallback
pub const EXERCISE_KEYWORDS: &[&str] = &[
    "run",
    "jog",
    "walk",
    "swim",
    "cycle",
    "lift",
    "press",
    "squat",
    "deadlift",
    "yoga",
    "pilates",
    "cardio",
    "strength",
    "hiit",
    "training",
    "workout",
    "exercise",
    "row",
    "curl",
    "extension",
    "fly",
    "raise",
    "pull",
    "push",
];

/// Keywords classifying an exercise as strength work (checked first)
pub const STRENGTH_KEYWORDS: &[&str] = &[
    "strength",
    "weight",
    "lift",
    "press",
    "squat",
    "deadlift",
    "bench",
    "curl",
    "row",
    "extension",
    "fly",
    "raise",
    "pull",
    "push",
    "lunge",
    "dumbbell",
    "barbell",
    "kettlebell",
];

/// Keywords classifying an exercise as flexibility work
pub const FLEXIBILITY_KEYWORDS: &[&str] = &["yoga", "pilates", "stretch", "flexibility"];

/// Keywords classifying an exercise as cardio
pub const CARDIO_KEYWORDS: &[&str] = &["run", "jog", "walk", "cycle", "swim", "cardio", "hiit"];

/// Keywords classifying an exercise as a sport
pub const SPORTS_KEYWORDS: &[&str] = &["basketball", "football", "soccer", "tennis", "sports"];

/// Explicit phrases announcing a meal plan
pub const MEAL_PLAN_PHRASES: &[&str] = &[
    "meal plan",
    "diet plan",
    "nutrition plan",
    "eating plan",
    "food plan",
];

/// Explicit phrases announcing a workout plan
pub const WORKOUT_PLAN_PHRASES: &[&str] = &[
    "workout plan",
    "training plan",
    "exercise plan",
    "fitness plan",
    "training program",
];

/// Workout words that signal a schedule when they share a line with a weekday
pub const WORKOUT_CONTEXT_KEYWORDS: &[&str] = &[
    "workout",
    "exercise",
    "training",
    "cardio",
    "strength",
    "hiit",
];

/// Activity words counted across the whole text for the workout signal
pub const ACTIVITY_KEYWORDS: &[&str] = &[
    "squat",
    "deadlift",
    "bench press",
    "push-up",
    "push up",
    "pull-up",
    "pull up",
    "lunge",
    "plank",
    "burpee",
    "running",
    "jogging",
    "cycling",
    "swimming",
    "yoga",
    "pilates",
    "hiit",
    "sets",
    "reps",
];

/// Minimum summed activity keyword occurrences for the workout signal
pub const ACTIVITY_KEYWORD_THRESHOLD: usize = 2;

/// Minimum occurrences of a single meal name ("breakfast", "lunch") for the meal signal
pub const REPEATED_MEAL_THRESHOLD: usize = 2;
