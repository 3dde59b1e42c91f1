// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for coach-plans
// ABOUTME: Provides classify, extract, store, load, and config commands

pub mod classify;
pub mod config;
pub mod extract;
pub mod store;
