// ABOUTME: Main library entry point for the coach plan extraction engine
// ABOUTME: Turns free-text coach responses into meal plans, workout plans, and a plan type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Plans
//!
//! Extracts structured plans from the free-form text an AI coach writes in a
//! chat. Nothing about the input is assumed: plain prose, bullet lists, and
//! loose markdown are all accepted, and text without a plan simply yields
//! empty results.
//!
//! ## Example Usage
//!
//! ```rust
//! use coach_plans::intelligence::{classify_plan_type, extract_workout_plan};
//! use coach_plans::models::PlanType;
//!
//! let text = "Day 1\nSquat 4x8 100kg\nRun 20 min\nWalking lunges 3x12";
//! assert_eq!(classify_plan_type(text), PlanType::Workout);
//!
//! let plan = extract_workout_plan(text);
//! assert_eq!(plan.len(), 3);
//! assert_eq!(plan[0].weight.as_deref(), Some("100kg"));
//! ```

/// Keyword tables, defaults, and storage keys
pub use coach_plans_core::constants;

/// Unified error handling
pub use coach_plans_core::errors;

/// Plan records shared with storage and UI consumers
pub use coach_plans_core::models;

/// Extraction configuration with environment overrides
pub mod config;

/// Output formats for extracted plans
pub mod formatters;

/// Plan extraction engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;
