// ABOUTME: Benchmark fixtures generating realistic coach responses
// ABOUTME: Deterministic meal, workout, and mixed responses sized by day count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating realistic coach responses.

use std::fmt::Write;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MEALS: [(&str, &str); 4] = [
    ("Breakfast", "Oatmeal with berries"),
    ("Lunch", "Grilled chicken salad"),
    ("Dinner", "Salmon with quinoa"),
    ("Snack", "Greek yogurt"),
];

const EXERCISES: [&str; 6] = [
    "Bench Press 4x8 80kg",
    "Pull-ups: 3 sets, 10 reps",
    "Run 30 min easy pace",
    "Squats 5x5 100kg",
    "Yoga flow 20 min",
    "Cycling 45 minutes",
];

/// Predefined response sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ResponseSize {
    /// One week, a typical coach reply
    Week,
    /// Four weeks, a long program
    Month,
    /// Twelve weeks, a stress case
    Quarter,
}

impl ResponseSize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 28,
            Self::Quarter => 84,
        }
    }
}

/// Meal plan with all four slots per day
#[must_use]
pub fn meal_response(size: ResponseSize) -> String {
    let mut text = String::from("Here's your meal plan:\n\n");
    for day in 0..size.days() {
        let _ = writeln!(text, "**{}**", WEEKDAYS[day % WEEKDAYS.len()]);
        for (offset, (slot, name)) in MEALS.iter().enumerate() {
            let calories = 200 + (day * 37 + offset * 91) % 500;
            let protein = 10 + (day * 7 + offset * 5) % 35;
            let _ = writeln!(text, "- {slot}: {name} {calories} kcal, {protein}g protein");
        }
        text.push('\n');
    }
    text
}

/// Numbered-day workout program with three exercises per day
#[must_use]
pub fn workout_response(size: ResponseSize) -> String {
    let mut text = String::from("Here's your training block:\n\n");
    for day in 0..size.days() {
        let _ = writeln!(text, "Day {}", day + 1);
        for offset in 0..3 {
            let _ = writeln!(text, "- {}", EXERCISES[(day + offset) % EXERCISES.len()]);
        }
        text.push('\n');
    }
    text
}

/// Meal plan followed by a workout program
#[must_use]
pub fn mixed_response(size: ResponseSize) -> String {
    let mut text = meal_response(size);
    text.push_str(&workout_response(size));
    text
}

/// Independent responses cycling through the three kinds
#[must_use]
pub fn response_batch(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| match index % 3 {
            0 => meal_response(ResponseSize::Week),
            1 => workout_response(ResponseSize::Week),
            _ => mixed_response(ResponseSize::Week),
        })
        .collect()
}
