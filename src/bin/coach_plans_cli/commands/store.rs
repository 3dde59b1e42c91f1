// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Store and load commands for coach-plans
// ABOUTME: Writes extracted plans to `<storage key>.json` files and reads them back

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use coach_plans::errors::{AppError, AppResult};
use coach_plans::formatters::OutputFormat;
use coach_plans::intelligence::{PlanExtractor, StoredPlan};

use crate::helpers::display::{display_nothing_stored, display_stored, print_formatted};
use crate::helpers::input::read_response;

fn plan_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Extract plans and write each non-empty one under its storage key
pub fn store(extractor: &PlanExtractor, input: Option<&Path>, dir: &Path) -> AppResult<()> {
    let text = read_response(input)?;
    let plans = extractor.extract(&text);

    let stored: Vec<StoredPlan> = [
        StoredPlan::Meal(plans.meal_plan),
        StoredPlan::Workout(plans.workout_plan),
    ]
    .into_iter()
    .filter(|plan| !plan.is_empty())
    .collect();

    if stored.is_empty() {
        display_nothing_stored();
        return Ok(());
    }

    fs::create_dir_all(dir)
        .map_err(|e| AppError::from(e).with_resource_id(dir.display().to_string()))?;

    for plan in &stored {
        let path = plan_path(dir, plan.storage_key());
        fs::write(&path, plan.to_json()?)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;

        info!(key = plan.storage_key(), records = plan.len(), "plan stored");
        display_stored(plan.storage_key(), plan.len(), &path);
    }

    Ok(())
}

/// Read the plan stored under `key` and print it
pub fn load(dir: &Path, key: &str, format: OutputFormat) -> AppResult<()> {
    StoredPlan::check_key(key)?;
    let path = plan_path(dir, key);
    let json = fs::read_to_string(&path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;

    let plan = StoredPlan::from_json(key, &json)?;
    info!(key, records = plan.len(), "plan loaded");
    print_formatted(&plan, format)
}
