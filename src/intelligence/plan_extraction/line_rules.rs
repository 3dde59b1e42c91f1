// ABOUTME: Shared line classification primitives for the plan extractors
// ABOUTME: Ordered line-rule scanner, keyword matching, bullet stripping, and name cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Line Rules
//!
//! Both extractors walk the response line by line and run an ordered ladder
//! of [`LineRule`]s against each line. A rule that returns
//! [`RuleOutcome::Consumed`] ends processing of that line, so the position of
//! a rule in its slice is its precedence.
//!
//! The scan state is an explicit accumulator folded over the lines; nothing
//! survives between calls.

use regex::{Captures, Regex};
use std::borrow::Cow;
use tracing::trace;

/// Result of applying one rule to one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Rule did not recognise the line
    NoMatch,
    /// Rule updated the state; later rules still see the line
    Applied,
    /// Rule updated the state; the line is finished
    Consumed,
}

/// A single line in both its original and case-folded forms
#[derive(Debug)]
pub struct ScanLine<'a> {
    /// Trimmed line as written
    pub text: &'a str,
    /// Lower-case copy used for matching
    pub folded: String,
}

impl<'a> ScanLine<'a> {
    /// Wrap a trimmed source line
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            folded: text.to_lowercase(),
        }
    }

    /// Folded line without leading list or heading markers
    #[must_use]
    pub fn folded_body(&self) -> &str {
        strip_list_marker(&self.folded)
    }
}

/// Named rule in an extractor's priority ladder
pub struct LineRule<C, S> {
    /// Rule name used in trace logs
    pub name: &'static str,
    /// Rule body, given the extractor context, the line, and the scan state
    pub apply: fn(&C, &ScanLine<'_>, &mut S) -> RuleOutcome,
}

/// Fold `rules` over every non-blank line of `text`, starting from `state`
pub fn scan_lines<C, S>(context: &C, text: &str, rules: &[LineRule<C, S>], state: S) -> S {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(state, |mut state, raw| {
            let line = ScanLine::new(raw);
            for rule in rules {
                if (rule.apply)(context, &line, &mut state) == RuleOutcome::Consumed {
                    trace!(rule = rule.name, line = raw, "line consumed");
                    break;
                }
            }
            state
        })
}

/// Whether `keyword` occurs in `haystack` at the start of a word
///
/// `squat` matches `squats` and `push` matches `push-ups`, but `row` does not
/// match inside `tomorrow`.
#[must_use]
pub fn contains_word_prefix(haystack: &str, keyword: &str) -> bool {
    count_word_prefix(haystack, keyword) > 0
}

/// Number of word-start occurrences of `keyword` in `haystack`
#[must_use]
pub fn count_word_prefix(haystack: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    haystack
        .match_indices(keyword)
        .filter(|(index, _)| {
            haystack[..*index]
                .chars()
                .next_back()
                .is_none_or(|previous| !previous.is_alphanumeric())
        })
        .count()
}

/// First keyword from `keywords` (in table order) occurring at a word start
#[must_use]
pub fn first_word_prefix<'k>(haystack: &str, keywords: &[&'k str]) -> Option<&'k str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| contains_word_prefix(haystack, keyword))
}

/// Whether `line` begins with `token` followed by a word boundary
#[must_use]
pub fn starts_with_word(line: &str, token: &str) -> bool {
    line.strip_prefix(token).is_some_and(|rest| {
        rest.chars()
            .next()
            .is_none_or(|next| !next.is_alphanumeric())
    })
}

/// Remove leading bullet, quote, heading, and numbered-list markers
#[must_use]
pub fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim_start_matches(|c: char| {
        matches!(c, '-' | '*' | '•' | '·' | '#' | '>' | '+') || c.is_whitespace()
    });

    // Numbered list marker such as "1." or "2)" followed by a space
    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if after.starts_with(char::is_whitespace) {
                return after.trim_start();
            }
        }
    }

    trimmed
}

/// Drop markdown emphasis markers (`**bold**`, `__bold__`)
#[must_use]
pub fn strip_emphasis(text: &str) -> Cow<'_, str> {
    if text.contains("**") || text.contains("__") {
        Cow::Owned(text.replace("**", "").replace("__", ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Collapse whitespace runs to single spaces and trim separator punctuation
#[must_use]
pub fn tidy_name(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| {
            matches!(c, ',' | ';' | ':' | '-' | '–' | '—' | '|' | '/' | '@' | '+')
                || c.is_whitespace()
        })
        .to_owned()
}

/// Upper-case the first character
#[must_use]
pub fn capitalize_first(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.extend(chars);
    }
    result
}

/// Upper-case the first character of every space-separated word
#[must_use]
pub fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

/// Compile a static pattern, logging instead of panicking if it is rejected
pub fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| tracing::error!(pattern, error = %e, "invalid plan extraction pattern"))
        .ok()
}

/// First match of `pattern` in `text`, if the pattern compiled
#[must_use]
pub fn captures<'t>(pattern: Option<&Regex>, text: &'t str) -> Option<Captures<'t>> {
    pattern.and_then(|re| re.captures(text))
}

/// Parse capture group `group` as an unsigned number; overflow counts as absent
#[must_use]
pub fn capture_number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_prefix_respects_word_start() {
        assert!(contains_word_prefix("3 sets of squats", "squat"));
        assert!(contains_word_prefix("push-ups 3x15", "push"));
        assert!(!contains_word_prefix("see you tomorrow", "row"));
        assert!(!contains_word_prefix("sunday brunch", "run"));
        assert_eq!(count_word_prefix("sets, more sets, presets", "sets"), 2);
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("- squats"), "squats");
        assert_eq!(strip_list_marker("  * • squats"), "squats");
        assert_eq!(strip_list_marker("### monday"), "monday");
        assert_eq!(strip_list_marker("2. bench press"), "bench press");
        assert_eq!(strip_list_marker("3x10 squats"), "3x10 squats");
        assert_eq!(strip_list_marker("30 min run"), "30 min run");
    }

    #[test]
    fn test_starts_with_word() {
        assert!(starts_with_word("back: rows and pulls", "back"));
        assert!(starts_with_word("legs", "legs"));
        assert!(!starts_with_word("backward lunges", "back"));
    }

    #[test]
    fn test_tidy_name() {
        assert_eq!(tidy_name("  greek   yogurt ,  "), "greek yogurt");
        assert_eq!(tidy_name("Squats: "), "Squats");
        assert_eq!(tidy_name(" - "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("deadlift"), "Deadlift");
        assert_eq!(title_case("bench press"), "Bench Press");
    }

    #[test]
    fn test_scan_lines_stops_at_consumed() {
        fn consume_day(_: &(), line: &ScanLine<'_>, seen: &mut Vec<String>) -> RuleOutcome {
            if line.folded.starts_with("day") {
                seen.push(format!("day:{}", line.text));
                RuleOutcome::Consumed
            } else {
                RuleOutcome::NoMatch
            }
        }
        fn record(_: &(), line: &ScanLine<'_>, seen: &mut Vec<String>) -> RuleOutcome {
            seen.push(line.text.to_owned());
            RuleOutcome::Applied
        }

        let rules: [LineRule<(), Vec<String>>; 2] = [
            LineRule {
                name: "day",
                apply: consume_day,
            },
            LineRule {
                name: "record",
                apply: record,
            },
        ];

        let seen = scan_lines(&(), "Day 1\n\n  Squats  \r\nRun", &rules, Vec::new());
        assert_eq!(seen, vec!["day:Day 1", "Squats", "Run"]);
    }
}
