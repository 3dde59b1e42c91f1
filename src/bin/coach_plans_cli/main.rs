// ABOUTME: coach-plans CLI - extract meal and workout plans from coach response text
// ABOUTME: Classifies, extracts, stores, and reloads plans from files or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a saved coach response
//! coach-plans classify --input response.txt
//!
//! # Extract whatever plans the response contains, as indented JSON
//! echo "Day 1\nSquat 4x8 100kg" | coach-plans extract --format pretty
//!
//! # Extract only the workout plan, grouped by day
//! coach-plans extract --input response.txt --kind workout --group-by-day
//!
//! # Persist extracted plans under their storage keys, then read one back
//! coach-plans store --input response.txt --dir ./plans
//! coach-plans load --dir ./plans --key coach_workout_plan
//!
//! # Show the effective extraction configuration
//! coach-plans config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use coach_plans::config::ExtractionConfig;
use coach_plans::errors::AppResult;
use coach_plans::formatters::OutputFormat;
use coach_plans::intelligence::PlanExtractor;
use coach_plans::logging::LoggingConfig;

use commands::extract::PlanKind;

#[derive(Parser)]
#[command(
    name = "coach-plans",
    about = "Coach response plan extraction",
    long_about = "Extracts structured meal plans, workout plans, and a plan type from free-text coach responses."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a response as meal, workout, both, or none
    Classify {
        /// Response file (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format: json, pretty, or toon
        #[arg(long, short = 'f', default_value = "json")]
        format: OutputFormat,
    },

    /// Extract plans from a response
    Extract {
        /// Response file (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Which plan to extract; `auto` follows the classification
        #[arg(long, short = 'k', value_enum, default_value_t = PlanKind::Auto)]
        kind: PlanKind,

        /// Output format: json, pretty, or toon
        #[arg(long, short = 'f', default_value = "json")]
        format: OutputFormat,

        /// Group workout entries by day number
        #[arg(long)]
        group_by_day: bool,
    },

    /// Extract plans and write each one under its storage key
    Store {
        /// Response file (stdin when omitted or `-`)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Directory receiving `<storage key>.json` files
        #[arg(long, short = 'd')]
        dir: PathBuf,
    },

    /// Read a stored plan back and print it
    Load {
        /// Directory holding stored plans
        #[arg(long, short = 'd')]
        dir: PathBuf,

        /// Storage key (`coach_meal_plan` or `coach_workout_plan`)
        #[arg(long)]
        key: String,

        /// Output format: json, pretty, or toon
        #[arg(long, short = 'f', default_value = "pretty")]
        format: OutputFormat,
    },

    /// Print the effective extraction configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().with_verbosity(u8::from(cli.verbose));
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = ExtractionConfig::load()?;
    debug!(weekdays = ?config.weekdays, "extraction config loaded");

    if matches!(command, Command::Config) {
        return commands::config::show(&config);
    }

    let extractor = PlanExtractor::new(&config)?;

    match command {
        Command::Classify { input, format } => {
            commands::classify::run(&extractor, input.as_deref(), format)
        }
        Command::Extract {
            input,
            kind,
            format,
            group_by_day,
        } => commands::extract::run(&extractor, input.as_deref(), kind, format, group_by_day),
        Command::Store { input, dir } => commands::store::store(&extractor, input.as_deref(), &dir),
        Command::Load { dir, key, format } => commands::store::load(&dir, &key, format),
        Command::Config => commands::config::show(&config),
    }
}
