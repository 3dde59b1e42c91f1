// ABOUTME: Meal plan extraction from free-text coach responses
// ABOUTME: Tracks day boundaries, recognises meal-slot lines, and parses macros and names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Extractor
//!
//! The response is lower-cased once, then scanned with three rules in
//! priority order:
//!
//! 1. **Day boundary**: a weekday line flushes the open day (only if it holds
//!    at least one meal) and opens a new one.
//! 2. **Implicit first day**: a meal keyword before any day opens `Day 1`.
//! 3. **Meal slot**: `breakfast|lunch|dinner|snack` followed by a separator
//!    assigns the rest of the line to that slot; the last occurrence wins.
//!
//! A day line may also carry a meal (`Monday breakfast: oats`), so the day
//! rule never consumes the line.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use coach_plans_core::constants::defaults;
use coach_plans_core::constants::keywords::MEAL_SLOT_KEYWORDS;
use coach_plans_core::models::{MealEntry, MealPlanDay, MealSlot};

use super::line_rules::{
    capture_number, captures, compile, scan_lines, strip_emphasis, strip_list_marker, tidy_name,
    LineRule, RuleOutcome, ScanLine,
};
use super::vocabulary::DayVocabulary;
use crate::config::ExtractionConfig;

// Patterns run on lower-cased text, so no case-insensitive flag is needed

static MEAL_KEYWORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(&format!(r"\b({})\b", MEAL_SLOT_KEYWORDS.join("|"))));

static MEAL_SLOT_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!(
        r"\b({})\b[:\-\s]+(.*)",
        MEAL_SLOT_KEYWORDS.join("|")
    ))
});

// Each unit is matched by its shortest spelling plus any word tail, so the
// same pattern both reads the number and removes the whole token from the name

static CALORIES: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(\d+)\s*(?:kcal|cal)[a-z]*"));

static PROTEIN: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(\d+)g?\s*protein[a-z]*"));

static CARBS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(\d+)g?\s*carb[a-z]*"));

static FATS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(\d+)g?\s*fat[a-z]*"));

/// Parenthetical and bracketed asides such as `(about 2 cups)` or `[optional]`
static ASIDE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"\([^)]*\)|\[[^\]]*\]"));

/// Extracts a weekly meal plan from coach response text
#[derive(Debug, Clone)]
pub struct MealPlanExtractor {
    vocabulary: DayVocabulary,
    min_name_chars: usize,
    fallback_meal_name: String,
}

impl Default for MealPlanExtractor {
    fn default() -> Self {
        Self::new(DayVocabulary::default(), &ExtractionConfig::default())
    }
}

/// Accumulator threaded through the line scan
#[derive(Debug, Default)]
struct MealScan {
    days: Vec<MealPlanDay>,
    current: Option<MealPlanDay>,
}

impl MealScan {
    /// Close the open day, keeping it only if it holds at least one meal
    fn flush(&mut self) {
        if let Some(day) = self.current.take() {
            if day.has_meals() {
                self.days.push(day);
            }
        }
    }

    fn open_day(&mut self, label: String) {
        self.flush();
        self.current = Some(MealPlanDay::new(label));
    }

    fn finish(mut self) -> Vec<MealPlanDay> {
        self.flush();
        self.days
    }
}

const MEAL_RULES: &[LineRule<MealPlanExtractor, MealScan>] = &[
    LineRule {
        name: "day_boundary",
        apply: apply_day_boundary,
    },
    LineRule {
        name: "implicit_first_day",
        apply: apply_implicit_first_day,
    },
    LineRule {
        name: "meal_slot",
        apply: apply_meal_slot,
    },
];

impl MealPlanExtractor {
    /// Create an extractor with an explicit day vocabulary and fallbacks
    #[must_use]
    pub fn new(vocabulary: DayVocabulary, config: &ExtractionConfig) -> Self {
        Self {
            vocabulary,
            min_name_chars: config.min_name_chars,
            fallback_meal_name: config.fallback_meal_name.clone(),
        }
    }

    /// Extract meal plan days; unrecognised text yields an empty list
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<MealPlanDay> {
        let folded = text.to_lowercase();
        let days = scan_lines(self, &folded, MEAL_RULES, MealScan::default()).finish();
        debug!(days = days.len(), "meal plan extracted");
        days
    }

    /// Build a meal entry from the text following a slot keyword
    #[must_use]
    pub fn parse_meal_entry(&self, content: &str) -> MealEntry {
        let number = |pattern: &LazyLock<Option<Regex>>| {
            captures(pattern.as_ref(), content).and_then(|caps| capture_number(&caps, 1))
        };

        MealEntry {
            name: self.meal_name(content),
            calories: number(&CALORIES),
            protein: number(&PROTEIN),
            carbs: number(&CARBS),
            fats: number(&FATS),
        }
    }

    fn meal_name(&self, content: &str) -> String {
        let mut name = strip_emphasis(content).into_owned();
        for pattern in [&CALORIES, &PROTEIN, &CARBS, &FATS, &ASIDE] {
            if let Some(re) = pattern.as_ref() {
                name = re.replace_all(&name, " ").into_owned();
            }
        }
        let name = tidy_name(strip_list_marker(&name));

        if name.chars().count() < self.min_name_chars {
            self.fallback_meal_name.clone()
        } else {
            name
        }
    }
}

fn apply_day_boundary(
    extractor: &MealPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut MealScan,
) -> RuleOutcome {
    match extractor.vocabulary.find_day_boundary(&line.folded) {
        Some(label) => {
            scan.open_day(label.to_owned());
            RuleOutcome::Applied
        }
        None => RuleOutcome::NoMatch,
    }
}

fn apply_implicit_first_day(
    _: &MealPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut MealScan,
) -> RuleOutcome {
    let mentions_meal = MEAL_KEYWORD
        .as_ref()
        .is_some_and(|re| re.is_match(&line.folded));

    if scan.current.is_none() && mentions_meal {
        scan.open_day(format!("Day {}", defaults::IMPLICIT_FIRST_DAY_NUMBER));
        RuleOutcome::Applied
    } else {
        RuleOutcome::NoMatch
    }
}

fn apply_meal_slot(
    extractor: &MealPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut MealScan,
) -> RuleOutcome {
    let Some(caps) = captures(MEAL_SLOT_LINE.as_ref(), &line.folded) else {
        return RuleOutcome::NoMatch;
    };
    let Some(slot) = caps.get(1).and_then(|m| MealSlot::parse(m.as_str())) else {
        return RuleOutcome::NoMatch;
    };
    let content = caps.get(2).map_or("", |m| m.as_str());

    match scan.current.as_mut() {
        Some(day) => {
            day.set_slot(slot, extractor.parse_meal_entry(content));
            RuleOutcome::Applied
        }
        None => RuleOutcome::NoMatch,
    }
}
