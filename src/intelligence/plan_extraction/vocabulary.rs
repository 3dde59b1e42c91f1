// ABOUTME: Injected weekday vocabulary used for day-boundary detection
// ABOUTME: Precompiles whole-word and heading patterns for each configured day name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;

use coach_plans_core::constants::keywords::DEFAULT_WEEKDAYS;

use super::line_rules::{capitalize_first, compile};

/// A configured day name with its precompiled matchers
#[derive(Debug, Clone)]
struct DayName {
    /// Lower-case name as matched
    key: String,
    /// Capitalized display label
    label: String,
    /// `\b<name>\b`
    whole_word: Option<Regex>,
    /// Name at line start, or name followed by a colon
    heading: Option<Regex>,
}

impl DayName {
    fn new(name: &str) -> Self {
        let key = name.trim().to_lowercase();
        let escaped = regex::escape(&key);
        Self {
            label: capitalize_first(&key),
            whole_word: compile(&format!(r"\b{escaped}\b")),
            heading: compile(&format!(r"^{escaped}\b|\b{escaped}\s*:")),
            key,
        }
    }

    fn is_whole_word_in(&self, folded: &str) -> bool {
        self.whole_word
            .as_ref()
            .map_or_else(|| folded.contains(&self.key), |re| re.is_match(folded))
    }
}

/// Ordered weekday table; scan order decides ties between names on one line
#[derive(Debug, Clone)]
pub struct DayVocabulary {
    days: Vec<DayName>,
}

impl Default for DayVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_WEEKDAYS)
    }
}

impl DayVocabulary {
    /// Build a vocabulary from day names in scan order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            days: names
                .into_iter()
                .map(|name| DayName::new(name.as_ref()))
                .filter(|day| !day.key.is_empty())
                .collect(),
        }
    }

    /// Day introduced by a meal-plan line
    ///
    /// A line introduces a day when it mentions the name as a whole word,
    /// starts with it, or contains `day <name>` or `<name>:`. The first day in
    /// table order wins, not the first one written on the line.
    #[must_use]
    pub fn find_day_boundary(&self, folded: &str) -> Option<&str> {
        self.days
            .iter()
            .find(|day| {
                day.is_whole_word_in(folded)
                    || folded.starts_with(&day.key)
                    || folded.contains(&format!("day {}", day.key))
                    || folded.contains(&format!("{}:", day.key))
            })
            .map(|day| day.label.as_str())
    }

    /// Day announced by a workout-plan heading line
    ///
    /// Only a name at the start of the line, or a name followed by a colon,
    /// counts; a weekday mentioned mid-sentence does not move the cursor.
    #[must_use]
    pub fn find_day_heading(&self, folded_body: &str) -> Option<&str> {
        self.days
            .iter()
            .find(|day| {
                day.heading.as_ref().map_or_else(
                    || {
                        folded_body.starts_with(&day.key)
                            || folded_body.contains(&format!("{}:", day.key))
                    },
                    |re| re.is_match(folded_body),
                )
            })
            .map(|day| day.label.as_str())
    }

    /// Whether any configured day is mentioned as a whole word
    #[must_use]
    pub fn mentions_any(&self, folded: &str) -> bool {
        self.days.iter().any(|day| day.is_whole_word_in(folded))
    }
}
