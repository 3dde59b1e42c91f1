// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Config command for coach-plans
// ABOUTME: Prints the extraction configuration after environment overrides

use coach_plans::config::ExtractionConfig;
use coach_plans::errors::AppResult;
use coach_plans::formatters::OutputFormat;

use crate::helpers::display::print_formatted;

/// Print the effective configuration as indented JSON
pub fn show(config: &ExtractionConfig) -> AppResult<()> {
    print_formatted(config, OutputFormat::Pretty)
}
