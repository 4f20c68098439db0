// ABOUTME: Configuration management module for client settings
// ABOUTME: Re-exports the environment-driven client configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the `CookSense` client
//!
//! Configuration is environment-only; there is no config file. See
//! [`environment::ClientConfig::from_env`] for the recognised variables.

/// Client configuration from environment variables
pub mod environment;

pub use environment::{ClientConfig, LogLevel};
