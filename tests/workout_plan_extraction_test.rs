// ABOUTME: Integration tests for workout plan extraction from coach responses
// ABOUTME: Covers day markers, category headers, metrics precedence, types, and name fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use coach_plans::config::ExtractionConfig;
use coach_plans::intelligence::PlanExtractor;
use coach_plans::models::{WorkoutEntry, WorkoutType};
use common::{extractor, workout_named, WEEKDAY_WORKOUTS, WORKOUT_WEEK};

#[test]
fn test_concrete_day_one_scenario() {
    let entries = extractor().extract_workout_plan("Day 1\nSquat 4x8 100kg\nRun 20 min");

    assert_eq!(
        entries,
        vec![
            WorkoutEntry {
                name: "Squat".to_owned(),
                workout_type: WorkoutType::Strength,
                duration: 0,
                sets: Some("4".to_owned()),
                reps: Some("8".to_owned()),
                weight: Some("100kg".to_owned()),
                day: Some("Day 1".to_owned()),
                day_number: Some(1),
            },
            WorkoutEntry {
                name: "Run".to_owned(),
                workout_type: WorkoutType::Cardio,
                duration: 20,
                sets: None,
                reps: None,
                weight: None,
                day: Some("Day 1".to_owned()),
                day_number: Some(1),
            },
        ]
    );
}

#[test]
fn test_week_entries_in_source_order() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);

    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Bench Press",
            "Pull-ups",
            "Shoulder press",
            "Run easy pace",
            "Cycling",
            "Squats",
            "Walking lunges",
        ]
    );
}

#[test]
fn test_category_headers_and_day_lines_are_not_exercises() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);

    assert!(entries
        .iter()
        .all(|entry| !entry.name.to_lowercase().starts_with("upper body")
            && entry.name != "Legs"
            && !entry.name.starts_with("Day")));
}

#[test]
fn test_sets_by_reps_takes_precedence() {
    let entries = extractor().extract_workout_plan("Bench Press 3x10 90kg");

    let bench = &entries[0];
    assert_eq!(bench.name, "Bench Press");
    assert_eq!(bench.sets.as_deref(), Some("3"));
    assert_eq!(bench.reps.as_deref(), Some("10"));
    assert_eq!(bench.weight.as_deref(), Some("90kg"));
    assert_eq!(bench.duration, 0);
    assert_eq!(bench.workout_type, WorkoutType::Strength);
}

#[test]
fn test_separate_sets_and_reps() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);

    let pull_ups = workout_named(&entries, "Pull-ups");
    assert_eq!(pull_ups.sets.as_deref(), Some("3"));
    assert_eq!(pull_ups.reps.as_deref(), Some("10"));
    assert_eq!(pull_ups.weight, None);
    assert_eq!(pull_ups.duration, 0);
}

#[test]
fn test_durations() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);

    assert_eq!(workout_named(&entries, "Run easy pace").duration, 30);
    assert_eq!(workout_named(&entries, "Cycling").duration, 45);

    let untimed = extractor().extract_workout_plan("Easy jog around the park");
    assert_eq!(untimed[0].duration, 30);
    assert_eq!(untimed[0].sets, None);
}

#[test]
fn test_plural_minutes_are_removed_from_name() {
    let entries = extractor().extract_workout_plan("Run 20 mins\nWalk 15 minutes");

    assert_eq!(entries[0].name, "Run");
    assert_eq!(entries[0].duration, 20);
    assert_eq!(entries[1].name, "Walk");
    assert_eq!(entries[1].duration, 15);
}

#[test]
fn test_numbered_days_tag_entries() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);

    let day_numbers: Vec<Option<u32>> = entries.iter().map(|entry| entry.day_number).collect();
    assert_eq!(
        day_numbers,
        vec![Some(1), Some(1), Some(1), Some(2), Some(2), Some(3), Some(3)]
    );
    assert_eq!(workout_named(&entries, "Squats").day.as_deref(), Some("Day 3"));
}

#[test]
fn test_oversized_day_number_still_opens_a_day() {
    let entries = extractor().extract_workout_plan("Day 99999999999\nSquat 3x10\nDay 2\nLunges 3x12");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Squat");
    assert_eq!(entries[0].day.as_deref(), Some("Day 99999999999"));
    assert_eq!(entries[0].day_number, None);
    assert_eq!(entries[1].day.as_deref(), Some("Day 2"));
    assert_eq!(entries[1].day_number, Some(2));
}

#[test]
fn test_weekday_headings_count_up() {
    let entries = extractor().extract_workout_plan(WEEKDAY_WORKOUTS);

    assert_eq!(entries.len(), 3);

    let deadlift = workout_named(&entries, "Deadlift");
    assert_eq!(deadlift.day.as_deref(), Some("Monday"));
    assert_eq!(deadlift.day_number, Some(1));
    assert_eq!(deadlift.weight.as_deref(), Some("140kg"));

    let yoga = workout_named(&entries, "Yoga flow");
    assert_eq!(yoga.day.as_deref(), Some("Wednesday"));
    assert_eq!(yoga.day_number, Some(2));
    assert_eq!(yoga.workout_type, WorkoutType::Flexibility);
    assert_eq!(yoga.duration, 40);

    let tennis = workout_named(&entries, "Tennis match");
    assert_eq!(tennis.day.as_deref(), Some("Friday"));
    assert_eq!(tennis.day_number, Some(3));
    assert_eq!(tennis.workout_type, WorkoutType::Sports);
    assert_eq!(tennis.duration, 60);
}

#[test]
fn test_day_number_wins_over_weekday_on_same_line() {
    let entries =
        extractor().extract_workout_plan("Day 2 (Tuesday)\nSquats 3x5\nThursday\nRow 4x10");

    let squats = workout_named(&entries, "Squats");
    assert_eq!(squats.day.as_deref(), Some("Day 2"));
    assert_eq!(squats.day_number, Some(2));

    let row = workout_named(&entries, "Row");
    assert_eq!(row.day.as_deref(), Some("Thursday"));
    assert_eq!(row.day_number, Some(3));
}

#[test]
fn test_entries_before_any_day_are_unscheduled() {
    let entries = extractor().extract_workout_plan("Warm up with a 10 min jog\nDay 1\nSquats 5x5");

    let warm_up = &entries[0];
    assert_eq!(warm_up.name, "Warm up with a jog");
    assert_eq!(warm_up.duration, 10);
    assert_eq!(warm_up.workout_type, WorkoutType::Cardio);
    assert_eq!(warm_up.day, None);
    assert_eq!(warm_up.day_number, None);
}

#[test]
fn test_type_ladder_order() {
    let entries = extractor()
        .extract_workout_plan("Walking lunges 3x12\nStretch 10 min\nSwim 20 min\nBasketball 45 min\nBurpees 3x20");

    let types: Vec<WorkoutType> = entries.iter().map(|entry| entry.workout_type).collect();
    assert_eq!(
        types,
        vec![
            WorkoutType::Strength,
            WorkoutType::Flexibility,
            WorkoutType::Cardio,
            WorkoutType::Sports,
            WorkoutType::Cardio,
        ]
    );
}

#[test]
fn test_lines_without_training_tokens_or_keywords_are_ignored() {
    let entries = extractor().extract_workout_plan(WORKOUT_WEEK);
    assert!(entries.iter().all(|entry| !entry.name.contains("Plank")));

    assert!(extractor()
        .extract_workout_plan("Remember to hydrate and sleep well")
        .is_empty());
}

#[test]
fn test_line_without_a_name_is_dropped() {
    let entries = extractor().extract_workout_plan("Day 1\n- 3x10\n- Squats 3x10");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Squats");
}

#[test]
fn test_short_name_falls_back_to_keyword() {
    let config = ExtractionConfig {
        min_name_chars: 6,
        ..ExtractionConfig::default()
    };
    let extractor = PlanExtractor::new(&config).unwrap();

    let entries = extractor.extract_workout_plan("- squat 5x5\n- 4x4");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Squat");
}

#[test]
fn test_configured_default_duration() {
    let config = ExtractionConfig {
        default_duration_minutes: 45,
        ..ExtractionConfig::default()
    };
    let extractor = PlanExtractor::new(&config).unwrap();

    let entries = extractor.extract_workout_plan("Easy jog\nSquats 3x5");
    assert_eq!(entries[0].duration, 45);
    assert_eq!(entries[1].duration, 0);
}

#[test]
fn test_empty_input() {
    assert!(extractor().extract_workout_plan("").is_empty());
    assert!(extractor().extract_workout_plan("\n\n   \n").is_empty());
}

#[test]
fn test_workout_entry_json_shape() {
    let entries = extractor().extract_workout_plan("Day 1\nSquat 4x8 100kg\nRun 20 min");

    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "name": "Squat",
                "type": "strength",
                "duration": 0,
                "sets": "4",
                "reps": "8",
                "weight": "100kg",
                "day": "Day 1",
                "dayNumber": 1
            },
            {
                "name": "Run",
                "type": "cardio",
                "duration": 20,
                "day": "Day 1",
                "dayNumber": 1
            }
        ])
    );
}
