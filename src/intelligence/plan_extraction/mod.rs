// ABOUTME: Plan extraction engine turning coach response text into structured plans
// ABOUTME: Wires the meal and workout extractors and the plan type classifier together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Extraction
//!
//! Every operation here is a pure function of its input text: no I/O, no
//! shared mutable state, and no failure mode. Unrecognised input yields
//! empty lists and [`PlanType::None`].
//!
//! ```text
//! text ──► PlanTypeClassifier ──► meal? ──► MealPlanExtractor ──► Vec<MealPlanDay>
//!                             └─► workout? ─► WorkoutPlanExtractor ─► Vec<WorkoutEntry>
//! ```
//!
//! The free functions use an engine built once from
//! [`ExtractionConfig::global`]; construct a [`PlanExtractor`] directly to
//! inject another day vocabulary.

mod grouping;
mod line_rules;
mod meal_plan;
mod plan_type;
mod storage;
mod vocabulary;
mod workout_plan;

pub use grouping::group_workouts_by_day;
pub use meal_plan::MealPlanExtractor;
pub use plan_type::{PlanSignals, PlanTypeClassifier};
pub use storage::StoredPlan;
pub use vocabulary::DayVocabulary;
pub use workout_plan::WorkoutPlanExtractor;

use rayon::prelude::*;
use std::sync::LazyLock;
use tracing::{debug, warn};

use coach_plans_core::models::{CoachPlans, MealPlanDay, PlanType, WorkoutEntry};

use crate::config::{ConfigError, ExtractionConfig};

/// Engine shared by the free functions
static DEFAULT_EXTRACTOR: LazyLock<PlanExtractor> = LazyLock::new(|| {
    PlanExtractor::new(ExtractionConfig::global()).unwrap_or_else(|e| {
        warn!("Invalid extraction config: {}, using defaults", e);
        PlanExtractor::default()
    })
});

/// Meal extractor, workout extractor, and classifier sharing one vocabulary
#[derive(Debug, Clone)]
pub struct PlanExtractor {
    meal: MealPlanExtractor,
    workout: WorkoutPlanExtractor,
    classifier: PlanTypeClassifier,
}

impl Default for PlanExtractor {
    fn default() -> Self {
        Self::from_parts(&ExtractionConfig::default())
    }
}

impl PlanExtractor {
    /// Build an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: &ExtractionConfig) -> Self {
        let vocabulary = DayVocabulary::new(&config.weekdays);
        Self {
            meal: MealPlanExtractor::new(vocabulary.clone(), config),
            workout: WorkoutPlanExtractor::new(vocabulary.clone(), config),
            classifier: PlanTypeClassifier::new(vocabulary),
        }
    }

    /// Extract meal plan days in source order
    #[must_use]
    pub fn extract_meal_plan(&self, text: &str) -> Vec<MealPlanDay> {
        self.meal.extract(text)
    }

    /// Extract a flat, day-tagged workout list in source order
    #[must_use]
    pub fn extract_workout_plan(&self, text: &str) -> Vec<WorkoutEntry> {
        self.workout.extract(text)
    }

    /// Classify the kind of plan the text contains
    #[must_use]
    pub fn classify_plan_type(&self, text: &str) -> PlanType {
        self.classifier.classify(text)
    }

    /// Evaluate the meal and workout signals separately
    #[must_use]
    pub fn plan_signals(&self, text: &str) -> PlanSignals {
        self.classifier.signals(text)
    }

    /// Classify, then run whichever extractors the classification selects
    #[must_use]
    pub fn extract(&self, text: &str) -> CoachPlans {
        let plan_type = self.classify_plan_type(text);

        let plans = CoachPlans {
            plan_type,
            meal_plan: if plan_type.includes_meal() {
                self.extract_meal_plan(text)
            } else {
                Vec::new()
            },
            workout_plan: if plan_type.includes_workout() {
                self.extract_workout_plan(text)
            } else {
                Vec::new()
            },
        };

        debug!(
            plan_type = %plans.plan_type,
            meal_days = plans.meal_plan.len(),
            workout_entries = plans.workout_plan.len(),
            "coach response processed"
        );
        plans
    }

    /// Process independent responses in parallel, preserving input order
    #[must_use]
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<CoachPlans>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect()
    }
}

/// Extract meal plan days using the globally configured engine
#[must_use]
pub fn extract_meal_plan(text: &str) -> Vec<MealPlanDay> {
    DEFAULT_EXTRACTOR.extract_meal_plan(text)
}

/// Extract workout entries using the globally configured engine
#[must_use]
pub fn extract_workout_plan(text: &str) -> Vec<WorkoutEntry> {
    DEFAULT_EXTRACTOR.extract_workout_plan(text)
}

/// Classify plan type using the globally configured engine
#[must_use]
pub fn classify_plan_type(text: &str) -> PlanType {
    DEFAULT_EXTRACTOR.classify_plan_type(text)
}

/// Classify and extract using the globally configured engine
#[must_use]
pub fn extract_coach_plans(text: &str) -> CoachPlans {
    DEFAULT_EXTRACTOR.extract(text)
}
