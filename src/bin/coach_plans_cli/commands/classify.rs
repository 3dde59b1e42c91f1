// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Classify command for coach-plans
// ABOUTME: Reports the plan type of a response along with the signals behind it

use serde::Serialize;
use std::path::Path;
use tracing::info;

use coach_plans::errors::AppResult;
use coach_plans::formatters::OutputFormat;
use coach_plans::intelligence::{PlanExtractor, PlanSignals};
use coach_plans::models::PlanType;

use crate::helpers::{display::print_formatted, input::read_response};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification {
    plan_type: PlanType,
    signals: PlanSignals,
}

/// Classify the response read from `input`
pub fn run(extractor: &PlanExtractor, input: Option<&Path>, format: OutputFormat) -> AppResult<()> {
    let text = read_response(input)?;
    let signals = extractor.plan_signals(&text);
    let classification = Classification {
        plan_type: signals.plan_type(),
        signals,
    };

    info!(plan_type = %classification.plan_type, "response classified");
    print_formatted(&classification, format)
}
