// ABOUTME: Groups a flat workout list into per-day buckets for planner views
// ABOUTME: Keys on day number, keeps first-appearance order, isolates unscheduled entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use coach_plans_core::models::{WorkoutDay, WorkoutEntry};

/// Group workout entries by `day_number`
///
/// Groups appear in the order their day number is first seen and exercises
/// keep source order inside a group. Entries without a day number each form
/// their own group, since there is nothing to merge them on. The label of a
/// group is the label of its first exercise.
#[must_use]
pub fn group_workouts_by_day(entries: &[WorkoutEntry]) -> Vec<WorkoutDay> {
    let mut groups: Vec<WorkoutDay> = Vec::new();
    let mut index_by_day: HashMap<u32, usize> = HashMap::new();

    for entry in entries {
        let Some(day_number) = entry.day_number else {
            groups.push(WorkoutDay {
                day_number: None,
                day: entry.day.clone(),
                exercises: vec![entry.clone()],
            });
            continue;
        };

        match index_by_day.entry(day_number) {
            Entry::Occupied(slot) => {
                if let Some(group) = groups.get_mut(*slot.get()) {
                    group.exercises.push(entry.clone());
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(WorkoutDay {
                    day_number: Some(day_number),
                    day: entry.day.clone(),
                    exercises: vec![entry.clone()],
                });
            }
        }
    }

    groups
}
