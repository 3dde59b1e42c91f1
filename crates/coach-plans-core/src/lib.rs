// ABOUTME: Core types and constants for the coach plan extraction engine
// ABOUTME: Foundation crate with error handling, plan record models, and keyword tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Plans Core
//!
//! Foundation crate providing the shared record types and keyword tables for
//! the coach plan extraction engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Keyword tables, defaults, and storage keys
//! - **models**: Meal plan, workout plan, and plan type records

/// Unified error handling system with standard error codes
pub mod errors;

/// Keyword tables, extraction defaults, and storage keys organized by domain
pub mod constants;

/// Plan records produced by extraction (`MealPlanDay`, `WorkoutEntry`, `PlanType`)
pub mod models;
