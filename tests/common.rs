// ABOUTME: Shared fixtures for plan extraction integration tests
// ABOUTME: Sample coach responses and small lookup helpers used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, missing_docs)]
#![allow(clippy::panic)]

use coach_plans::intelligence::PlanExtractor;
use coach_plans::models::{MealPlanDay, WorkoutEntry};

/// Three-day meal plan with a day that holds no meals
pub const MEAL_WEEK: &str = "Here's your 3-day meal plan:

**Monday**
- Breakfast: Oatmeal with banana (1 cup) 350 kcal, 12g protein, 60g carbs, 8g fat
- Lunch: Grilled chicken salad 450 calories 40g protein
- Dinner: Salmon with quinoa 600kcal
- Snack: Apple

Tuesday:
- Breakfast: Greek yogurt parfait 300 cal 20g protein
- Lunch: Turkey wrap 500kcal
- Dinner: Beef stir fry 650 kcal

Wednesday - rest from tracking, eat intuitively

Thursday
Breakfast: Eggs 200kcal
";

/// Numbered-day strength and cardio plan with category headings
pub const WORKOUT_WEEK: &str = "Day 1 - Upper Body
Upper body
- Bench Press 4x8 80kg
- Pull-ups: 3 sets, 10 reps
- Shoulder press 3x12 20kg

Day 2
- Run 30 min easy pace
- Cycling 45 minutes

Day 3: Legs
Legs
1. Squats 5x5 100kg
2. Walking lunges 3x12
3. Plank 60 sec
";

/// Weekday-headed plan
pub const WEEKDAY_WORKOUTS: &str = "Monday:
- Deadlift 5x3 140kg
Wednesday
- Yoga flow 40 min
Friday: Tennis match
- Tennis match 60 minutes
";

/// Response carrying both a meal plan and a workout plan
pub const MIXED_RESPONSE: &str = "Here's your meal plan for the week.

Monday
Breakfast: Oats 350kcal
Lunch: Chicken rice bowl 600kcal
Squats 4x10
Lunges 3x12
";

/// Chat reply without any plan
pub const PROSE: &str = "Great job today! Keep listening to your body and stay hydrated.";

/// Engine with the default configuration
pub fn extractor() -> PlanExtractor {
    PlanExtractor::default()
}

/// Find a workout entry by exact name
pub fn workout_named<'a>(entries: &'a [WorkoutEntry], name: &str) -> &'a WorkoutEntry {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or_else(|| panic!("no workout named {name} in {entries:#?}"))
}

/// Find a meal plan day by label
pub fn day_labeled<'a>(days: &'a [MealPlanDay], label: &str) -> &'a MealPlanDay {
    days.iter()
        .find(|day| day.day == label)
        .unwrap_or_else(|| panic!("no day labeled {label} in {days:#?}"))
}
