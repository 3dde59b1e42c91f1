// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling, defaults, and verbosity overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_plans::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 4] = ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME"];

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert!(matches!(config.format, LogFormat::Json));
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location);
    assert!(config.include_thread);

    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_default_logging_config() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }

    let config = LoggingConfig::from_env();

    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.level, "warn");
    assert!(matches!(config.format, LogFormat::Compact));
    assert_eq!(config.service_name, "coach-plans");
    assert!(!config.include_location);
}

#[test]
fn test_verbosity_overrides_level() {
    let quiet = LoggingConfig::default().with_verbosity(0);
    assert_eq!(quiet.level, "warn");

    let verbose = LoggingConfig::default().with_verbosity(1);
    assert_eq!(verbose.level, "debug");

    let very_verbose = LoggingConfig::default().with_verbosity(3);
    assert_eq!(very_verbose.level, "trace");
}
