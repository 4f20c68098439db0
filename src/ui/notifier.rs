// ABOUTME: User-visible alert channel used by every failure path
// ABOUTME: Tracing-backed notifier for the CLI and a recording notifier for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Blocking alert shown to the user
pub trait Notifier: Send + Sync {
    /// Surface one alert string
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr and the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        warn!(alert = message, "user alert");
        eprintln!("! {message}");
    }
}

/// Keeps every alert in memory; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts raised so far, oldest first
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent alert
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
