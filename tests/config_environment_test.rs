// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment-driven client configuration, overrides and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cooksense::config::{ClientConfig, LogLevel};
use cooksense::logging::{LogFormat, LoggingConfig};
use cooksense_core::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 5] = [
    "COOKSENSE_BASE_URL",
    "COOKSENSE_DATA_DIR",
    "COOKSENSE_USER_AGENT",
    "COOKSENSE_LOG_LEVEL",
    "RUST_LOG",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default(""), LogFormat::Pretty);
    assert_eq!(
        LoggingConfig::default().with_level("debug").level,
        "debug"
    );
}

#[test]
#[serial]
fn test_defaults_from_empty_environment() {
    clear_vars();
    env::set_var("COOKSENSE_DATA_DIR", "/tmp/cooksense-config-test");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5000/");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/cooksense-config-test"));
    assert!(config.user_agent.starts_with("cooksense/"));
    assert_eq!(config.log_level, LogLevel::Info);

    clear_vars();
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_vars();
    env::set_var("COOKSENSE_BASE_URL", "https://cook.example.com");
    env::set_var("COOKSENSE_DATA_DIR", "/tmp/cooksense-override");
    env::set_var("COOKSENSE_USER_AGENT", "fridge-bot/2");
    env::set_var("COOKSENSE_LOG_LEVEL", "debug");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url.host_str(), Some("cook.example.com"));
    assert_eq!(config.user_agent, "fridge-bot/2");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(
        config.endpoint("/generate").unwrap().as_str(),
        "https://cook.example.com/generate"
    );

    clear_vars();
}

#[test]
#[serial]
fn test_invalid_base_url_is_rejected() {
    clear_vars();
    env::set_var("COOKSENSE_BASE_URL", "ftp://files.example.com");
    env::set_var("COOKSENSE_DATA_DIR", "/tmp/cooksense-config-test");

    let err = ClientConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_vars();
}

#[test]
#[serial]
fn test_builder_overrides() {
    clear_vars();
    env::set_var("COOKSENSE_DATA_DIR", "/tmp/cooksense-config-test");

    let config = ClientConfig::from_env()
        .unwrap()
        .with_base_url("http://localhost:8080")
        .unwrap()
        .with_data_dir("/tmp/elsewhere");
    assert_eq!(config.base_url.port(), Some(8080));
    assert_eq!(config.data_dir, PathBuf::from("/tmp/elsewhere"));
    assert!(config.clone().with_base_url("not a url").is_err());

    clear_vars();
}

#[test]
#[serial]
fn test_client_log_level_seeds_logging_when_rust_log_unset() {
    clear_vars();
    env::set_var("COOKSENSE_DATA_DIR", "/tmp/cooksense-config-test");
    env::set_var("COOKSENSE_LOG_LEVEL", "trace");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(LoggingConfig::from_env(&config.log_level).level, "trace");

    env::set_var("RUST_LOG", "warn");
    assert_eq!(LoggingConfig::from_env(&config.log_level).level, "warn");

    clear_vars();
}
