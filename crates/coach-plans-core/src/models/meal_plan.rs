// ABOUTME: Meal plan records extracted from coach responses
// ABOUTME: MealPlanDay with optional breakfast/lunch/dinner/snack MealEntry slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::keywords::MEAL_SLOT_KEYWORDS;

/// Meal slot within a planned day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Breakfast slot
    Breakfast,
    /// Lunch slot
    Lunch,
    /// Dinner slot
    Dinner,
    /// Snack slot
    Snack,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lower-case keyword for this slot
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        MEAL_SLOT_KEYWORDS[*self as usize]
    }

    /// Parse slot from its keyword (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// A single planned meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal description, never empty
    pub name: String,
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<u32>,
}

impl MealEntry {
    /// Create a meal entry with no known macros
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
        }
    }
}

/// One planned day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanDay {
    /// Display label: capitalized weekday name or synthetic `Day N`
    pub day: String,
    /// Breakfast slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealEntry>,
    /// Lunch slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<MealEntry>,
    /// Dinner slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<MealEntry>,
    /// Snack slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<MealEntry>,
}

impl MealPlanDay {
    /// Create an empty day record
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            breakfast: None,
            lunch: None,
            dinner: None,
            snack: None,
        }
    }

    /// Get the meal in a slot
    #[must_use]
    pub const fn slot(&self, slot: MealSlot) -> Option<&MealEntry> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
        }
    }

    /// Set a slot, replacing any previous meal in it
    pub fn set_slot(&mut self, slot: MealSlot, entry: MealEntry) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        };
        *target = Some(entry);
    }

    /// Whether at least one slot is set
    #[must_use]
    pub const fn has_meals(&self) -> bool {
        self.breakfast.is_some()
            || self.lunch.is_some()
            || self.dinner.is_some()
            || self.snack.is_some()
    }

    /// Iterate the set slots in display order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.slot(slot).map(|entry| (slot, entry)))
    }

    /// Sum of known calories across the day, `None` when no meal states calories
    #[must_use]
    pub fn total_calories(&self) -> Option<u32> {
        self.meals()
            .filter_map(|(_, entry)| entry.calories)
            .reduce(u32::saturating_add)
    }
}
