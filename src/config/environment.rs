// ABOUTME: Environment configuration for the CookSense client
// ABOUTME: Parses endpoint base URL, data directory and logging settings from env variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use cooksense_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Default endpoint origin (the Flask development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Directory name created under the platform data directory
pub const DATA_DIR_NAME: &str = "cooksense";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin serving `/scan-fridge`, `/analyze-calories` and `/generate`
    pub base_url: Url,
    /// Directory holding the durable storage files
    pub data_dir: PathBuf,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `COOKSENSE_BASE_URL`: endpoint origin (default `http://127.0.0.1:5000`)
    /// - `COOKSENSE_DATA_DIR`: storage directory (default `<data dir>/cooksense`)
    /// - `COOKSENSE_USER_AGENT`: User-Agent header
    /// - `COOKSENSE_LOG_LEVEL`: default log level when `RUST_LOG` is unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the base URL does not parse, and `ConfigError`
    /// if no data directory is set and the platform has none
    pub fn from_env() -> AppResult<Self> {
        info!("Loading client configuration from environment");

        let base_url = parse_base_url(&env_var_or("COOKSENSE_BASE_URL", DEFAULT_BASE_URL))?;

        let data_dir = match env::var("COOKSENSE_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let config = Self {
            base_url,
            data_dir,
            user_agent: env_var_or(
                "COOKSENSE_USER_AGENT",
                &format!("cooksense/{}", env!("CARGO_PKG_VERSION")),
            ),
            log_level: LogLevel::from_str_or_default(&env_var_or("COOKSENSE_LOG_LEVEL", "info")),
        };

        debug!(
            base_url = %config.base_url,
            data_dir = %config.data_dir.display(),
            log_level = %config.log_level,
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Override the endpoint origin
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Override the storage directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Resolve an endpoint path against the base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the path cannot be joined
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::config_invalid(format!("cannot join '{path}': {e}")))
    }
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::config_invalid(format!("COOKSENSE_BASE_URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "COOKSENSE_BASE_URL '{raw}' must be an http(s) origin"
        )));
    }
    Ok(url)
}

fn default_data_dir() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .ok_or_else(|| AppError::config("no platform data directory; set COOKSENSE_DATA_DIR"))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_base_url_must_be_http() {
        assert!(parse_base_url("http://localhost:5000").is_ok());
        assert!(parse_base_url("ftp://localhost").is_err());
        assert!(parse_base_url("not a url").is_err());
    }
}
