// ABOUTME: Whole-text plan type classifier deciding which extractors to run
// ABOUTME: Combines independent meal and workout signals into meal, workout, both, or none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use coach_plans_core::constants::keywords::{
    ACTIVITY_KEYWORDS, ACTIVITY_KEYWORD_THRESHOLD, MEAL_PLAN_PHRASES, REPEATED_MEAL_THRESHOLD,
    WORKOUT_CONTEXT_KEYWORDS, WORKOUT_PLAN_PHRASES,
};
use coach_plans_core::models::PlanType;

use super::line_rules::{compile, count_word_prefix, first_word_prefix};
use super::vocabulary::DayVocabulary;

static MEAL_PHRASE: LazyLock<Option<Regex>> = LazyLock::new(|| phrase_pattern(MEAL_PLAN_PHRASES));

static WORKOUT_PHRASE: LazyLock<Option<Regex>> =
    LazyLock::new(|| phrase_pattern(WORKOUT_PLAN_PHRASES));

/// Three meal names in sequence, e.g. `breakfast ... lunch ... dinner`
static MEAL_SEQUENCE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"(?is)\b(breakfast|lunch|dinner|snack)\b.*\b(breakfast|lunch|dinner|snack)\b.*\b(breakfast|lunch|dinner|snack)\b",
    )
});

static BREAKFAST: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)\bbreakfast\b"));

static LUNCH: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)\blunch\b"));

fn phrase_pattern(phrases: &[&str]) -> Option<Regex> {
    let alternation = phrases
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"(?i)\b(?:{alternation})\b"))
}

fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

fn count_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    pattern
        .as_ref()
        .map_or(0, |re| re.find_iter(text).count())
}

/// The two independent whole-text signals behind a [`PlanType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlanSignals {
    /// Text looks like it contains a meal plan
    pub meal: bool,
    /// Text looks like it contains a workout plan
    pub workout: bool,
}

impl PlanSignals {
    /// Collapse the signals into a classification
    #[must_use]
    pub const fn plan_type(self) -> PlanType {
        PlanType::from_signals(self.meal, self.workout)
    }
}

/// Classifies a coach response as a meal plan, workout plan, both, or neither
#[derive(Debug, Clone, Default)]
pub struct PlanTypeClassifier {
    vocabulary: DayVocabulary,
}

impl PlanTypeClassifier {
    /// Create a classifier using `vocabulary` for weekday co-occurrence
    #[must_use]
    pub const fn new(vocabulary: DayVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Classify the whole text
    #[must_use]
    pub fn classify(&self, text: &str) -> PlanType {
        self.signals(text).plan_type()
    }

    /// Evaluate both signals without collapsing them
    #[must_use]
    pub fn signals(&self, text: &str) -> PlanSignals {
        PlanSignals {
            meal: Self::has_meal_signal(text),
            workout: self.has_workout_signal(text),
        }
    }

    /// Explicit phrase, three meal names in sequence, or a repeated breakfast or lunch
    fn has_meal_signal(text: &str) -> bool {
        is_match(&MEAL_PHRASE, text)
            || is_match(&MEAL_SEQUENCE, text)
            || count_matches(&BREAKFAST, text) >= REPEATED_MEAL_THRESHOLD
            || count_matches(&LUNCH, text) >= REPEATED_MEAL_THRESHOLD
    }

    /// Explicit phrase, a workout word on a weekday line, or enough activity words
    fn has_workout_signal(&self, text: &str) -> bool {
        if is_match(&WORKOUT_PHRASE, text) {
            return true;
        }

        let folded = text.to_lowercase();

        let scheduled = folded.lines().any(|line| {
            self.vocabulary.mentions_any(line)
                && first_word_prefix(line, WORKOUT_CONTEXT_KEYWORDS).is_some()
        });
        if scheduled {
            return true;
        }

        let activity_mentions: usize = ACTIVITY_KEYWORDS
            .iter()
            .map(|keyword| count_word_prefix(&folded, keyword))
            .sum();
        activity_mentions >= ACTIVITY_KEYWORD_THRESHOLD
    }
}
