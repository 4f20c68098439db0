// ABOUTME: In-memory durable storage used by tests and ephemeral sessions
// ABOUTME: Clones share one map so a test can inspect what the session persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DurableStorage;
use cooksense_core::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// `HashMap`-backed storage; optionally refuses writes to simulate a full disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make every subsequent write fail
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock().unwrap_or_else(PoisonError::into_inner) = read_only;
    }

    fn is_read_only(&self) -> bool {
        *self.read_only.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DurableStorage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.is_read_only() {
            return Err(AppError::storage(format!("storage is read-only, cannot write {key}")));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if self.is_read_only() {
            return Err(AppError::storage(format!("storage is read-only, cannot remove {key}")));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
