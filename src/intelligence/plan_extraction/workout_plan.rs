// ABOUTME: Workout plan extraction from free-text coach responses
// ABOUTME: Day markers, category headers, exercise detection, metrics, type, and name cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Plan Extractor
//!
//! Produces a flat list of [`WorkoutEntry`] records, each tagged with the day
//! that was active when its line was scanned. Rules, highest priority first:
//!
//! | Rule | Effect |
//! |------|--------|
//! | `numbered_day` | `Day 3` sets the day number and label, line consumed |
//! | `weekday_heading` | `Monday:` advances the day number by one, line consumed |
//! | `category_header` | `Upper body` without counts is a heading, line consumed |
//! | `exercise_line` | metrics, type, and name extracted into an entry |
//!
//! Matching runs on a case-folded copy; names are rebuilt from the line as
//! written so `Bench Press` keeps its capitals.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, trace};

use coach_plans_core::constants::defaults;
use coach_plans_core::constants::keywords::{
    CARDIO_KEYWORDS, CATEGORY_HEADERS, EXERCISE_KEYWORDS, FLEXIBILITY_KEYWORDS, SPORTS_KEYWORDS,
    STRENGTH_KEYWORDS,
};
use coach_plans_core::models::{WorkoutEntry, WorkoutType};

use super::line_rules::{
    capture_number, captures, compile, first_word_prefix, scan_lines, starts_with_word,
    strip_emphasis, strip_list_marker, tidy_name, title_case, LineRule, RuleOutcome, ScanLine,
};
use super::vocabulary::DayVocabulary;
use crate::config::ExtractionConfig;

static DAY_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)day\s*(\d+)"));

static SETS_X_REPS: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)(\d+)\s*[x×]\s*(\d+)"));

static SETS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)(\d+)\s*sets"));

static REPS: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)(\d+)\s*reps"));

static WEIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?i)(\d+)\s*(kg|lbs|lb)"));

// Longer spellings first so the whole unit is removed from the name
static DURATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)(\d+)\s*(minutes|mins|min)"));

/// Any numeric training token; makes a line an exercise candidate
static TRAINING_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\d+\s*(min|minutes|reps|sets|x|kg|lbs)"));

/// Count tokens that turn a category header back into an exercise line
static HEADER_COUNT_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)\d+\s*(sets|reps|min|minutes|x)"));

/// Type ladder, checked top to bottom
const TYPE_LADDER: &[(&[&str], WorkoutType)] = &[
    (STRENGTH_KEYWORDS, WorkoutType::Strength),
    (FLEXIBILITY_KEYWORDS, WorkoutType::Flexibility),
    (CARDIO_KEYWORDS, WorkoutType::Cardio),
    (SPORTS_KEYWORDS, WorkoutType::Sports),
];

/// Extracts a flat, day-tagged workout list from coach response text
#[derive(Debug, Clone)]
pub struct WorkoutPlanExtractor {
    vocabulary: DayVocabulary,
    default_duration_minutes: u32,
    min_name_chars: usize,
}

impl Default for WorkoutPlanExtractor {
    fn default() -> Self {
        Self::new(DayVocabulary::default(), &ExtractionConfig::default())
    }
}

/// Accumulator threaded through the line scan
#[derive(Debug, Default)]
struct WorkoutScan {
    entries: Vec<WorkoutEntry>,
    current_day: Option<String>,
    current_day_number: Option<u32>,
}

/// Sets, reps, weight, and duration found on one line
#[derive(Debug, Default)]
struct LineMetrics<'t> {
    sets: Option<String>,
    reps: Option<String>,
    weight: Option<String>,
    duration: Option<u32>,
    /// Matched substrings in removal order
    matched: Vec<&'t str>,
}

impl<'t> LineMetrics<'t> {
    fn parse(line: &'t str) -> Self {
        let mut metrics = Self::default();
        let whole = |caps: &Captures<'t>| caps.get(0).map(|m| m.as_str());
        let group = |caps: &Captures<'t>, index| caps.get(index).map(|m| m.as_str().to_owned());

        let sets_x_reps = captures(SETS_X_REPS.as_ref(), line);
        if let Some(caps) = &sets_x_reps {
            metrics.sets = group(caps, 1);
            metrics.reps = group(caps, 2);
            metrics.matched.extend(whole(caps));
        }

        if let Some(caps) = captures(WEIGHT.as_ref(), line) {
            metrics.weight = caps.get(1).zip(caps.get(2)).map(|(amount, unit)| {
                format!("{}{}", amount.as_str(), unit.as_str().to_lowercase())
            });
            metrics.matched.extend(whole(&caps));
        }

        if let Some(caps) = captures(DURATION.as_ref(), line) {
            metrics.duration = capture_number(&caps, 1);
            metrics.matched.extend(whole(&caps));
        }

        // Separate patterns only apply when no combined NxM token was found
        if sets_x_reps.is_none() {
            if let Some(caps) = captures(SETS.as_ref(), line) {
                metrics.sets = group(&caps, 1);
                metrics.matched.extend(whole(&caps));
            }
            if let Some(caps) = captures(REPS.as_ref(), line) {
                metrics.reps = group(&caps, 1);
                metrics.matched.extend(whole(&caps));
            }
        }

        metrics
    }

    const fn is_set_based(&self) -> bool {
        self.sets.is_some() || self.reps.is_some()
    }
}

const WORKOUT_RULES: &[LineRule<WorkoutPlanExtractor, WorkoutScan>] = &[
    LineRule {
        name: "numbered_day",
        apply: apply_numbered_day,
    },
    LineRule {
        name: "weekday_heading",
        apply: apply_weekday_heading,
    },
    LineRule {
        name: "category_header",
        apply: apply_category_header,
    },
    LineRule {
        name: "exercise_line",
        apply: apply_exercise_line,
    },
];

impl WorkoutPlanExtractor {
    /// Create an extractor with an explicit day vocabulary and fallbacks
    #[must_use]
    pub fn new(vocabulary: DayVocabulary, config: &ExtractionConfig) -> Self {
        Self {
            vocabulary,
            default_duration_minutes: config.default_duration_minutes,
            min_name_chars: config.min_name_chars,
        }
    }

    /// Extract workout entries in source order; unrecognised text yields an empty list
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<WorkoutEntry> {
        let entries = scan_lines(self, text, WORKOUT_RULES, WorkoutScan::default()).entries;
        debug!(entries = entries.len(), "workout plan extracted");
        entries
    }

    /// Parse one exercise line, or `None` if no usable name remains
    fn parse_exercise(&self, line: &ScanLine<'_>) -> Option<WorkoutEntry> {
        let metrics = LineMetrics::parse(line.text);

        let duration = metrics.duration.unwrap_or(if metrics.is_set_based() {
            defaults::SET_BASED_WORKOUT_DURATION_MINUTES
        } else {
            self.default_duration_minutes
        });

        let name = self.exercise_name(line, &metrics.matched)?;

        Some(WorkoutEntry {
            name,
            workout_type: classify_workout_type(&line.folded),
            duration,
            sets: metrics.sets,
            reps: metrics.reps,
            weight: metrics.weight,
            day: None,
            day_number: None,
        })
    }

    fn exercise_name(&self, line: &ScanLine<'_>, matched: &[&str]) -> Option<String> {
        let emphasis_free = strip_emphasis(line.text);
        let mut name = strip_list_marker(&emphasis_free)
            .trim_end()
            .trim_end_matches(':')
            .to_owned();

        for token in matched {
            name = name.replacen(token, " ", 1);
        }
        let name = tidy_name(&name);

        if name.chars().count() >= self.min_name_chars {
            return Some(name);
        }

        first_word_prefix(&line.folded, EXERCISE_KEYWORDS).map(title_case)
    }
}

/// First matching keyword group in ladder order; cardio when nothing matches
fn classify_workout_type(folded: &str) -> WorkoutType {
    TYPE_LADDER
        .iter()
        .find(|(keywords, _)| first_word_prefix(folded, keywords).is_some())
        .map_or(WorkoutType::Cardio, |(_, workout_type)| *workout_type)
}

fn apply_numbered_day(
    _: &WorkoutPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut WorkoutScan,
) -> RuleOutcome {
    let Some(caps) = captures(DAY_NUMBER.as_ref(), line.text) else {
        return RuleOutcome::NoMatch;
    };
    let digits = caps.get(1).map_or("", |m| m.as_str());

    // A number too large for a day index still marks a day, just an unnumbered one
    scan.current_day_number = capture_number(&caps, 1);
    scan.current_day = Some(format!("Day {digits}"));
    RuleOutcome::Consumed
}

fn apply_weekday_heading(
    extractor: &WorkoutPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut WorkoutScan,
) -> RuleOutcome {
    let Some(label) = extractor.vocabulary.find_day_heading(line.folded_body()) else {
        return RuleOutcome::NoMatch;
    };

    let next = scan.current_day_number.unwrap_or(0).saturating_add(1);
    scan.current_day_number = Some(next);
    scan.current_day = Some(label.to_owned());
    RuleOutcome::Consumed
}

fn apply_category_header(
    _: &WorkoutPlanExtractor,
    line: &ScanLine<'_>,
    _: &mut WorkoutScan,
) -> RuleOutcome {
    let body = line.folded_body();
    let is_header = CATEGORY_HEADERS
        .iter()
        .any(|header| starts_with_word(body, header));
    let has_counts = HEADER_COUNT_TOKEN
        .as_ref()
        .is_some_and(|re| re.is_match(body));

    if is_header && !has_counts {
        RuleOutcome::Consumed
    } else {
        RuleOutcome::NoMatch
    }
}

fn apply_exercise_line(
    extractor: &WorkoutPlanExtractor,
    line: &ScanLine<'_>,
    scan: &mut WorkoutScan,
) -> RuleOutcome {
    let has_token = TRAINING_TOKEN
        .as_ref()
        .is_some_and(|re| re.is_match(&line.folded));
    if !has_token && first_word_prefix(&line.folded, EXERCISE_KEYWORDS).is_none() {
        return RuleOutcome::NoMatch;
    }

    match extractor.parse_exercise(line) {
        Some(entry) => {
            scan.entries.push(WorkoutEntry {
                day: scan.current_day.clone(),
                day_number: scan.current_day_number,
                ..entry
            });
            RuleOutcome::Applied
        }
        None => {
            trace!(line = line.text, "exercise line dropped without a usable name");
            RuleOutcome::NoMatch
        }
    }
}
