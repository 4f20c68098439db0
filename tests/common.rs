// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds sessions over the mock endpoint client, in-memory storage and a recording notifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `cooksense`

use cooksense::api::{ImageUpload, MockRecipeApi};
use cooksense::app::AppSession;
use cooksense::config::{ClientConfig, LogLevel};
use cooksense::storage::MemoryStorage;
use cooksense::ui::RecordingNotifier;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Everything a session test needs to drive and observe a session
pub struct TestSession {
    pub session: AppSession,
    pub api: Arc<MockRecipeApi>,
    pub storage: MemoryStorage,
    pub alerts: RecordingNotifier,
}

/// Session over the stock mock and empty storage
pub fn create_test_session() -> TestSession {
    create_session_with(MockRecipeApi::new(), MemoryStorage::new())
}

/// Session over a custom mock and storage
pub fn create_session_with(api: MockRecipeApi, storage: MemoryStorage) -> TestSession {
    init_test_logging();
    let api = Arc::new(api);
    let alerts = RecordingNotifier::new();
    let session = AppSession::new(
        api.clone(),
        Arc::new(storage.clone()),
        Arc::new(alerts.clone()),
    )
    .unwrap();
    TestSession {
        session,
        api,
        storage,
        alerts,
    }
}

/// A non-empty photo
pub fn photo(name: &str) -> ImageUpload {
    ImageUpload::new(name, vec![0xFF, 0xD8, 0xFF, 0xE0])
}

/// Client configuration pointing at `base_url`, independent of the process environment
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: url::Url::parse(base_url).unwrap(),
        data_dir: std::env::temp_dir().join("cooksense-tests"),
        user_agent: "cooksense-tests".to_owned(),
        log_level: LogLevel::Warn,
    }
}
