// ABOUTME: Durable key/value storage abstraction backing the favorites list
// ABOUTME: File-backed implementation for real use and in-memory implementation for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Durable storage
//!
//! The client persists exactly one value (the favorites blob), but the seam
//! is a small string key/value store so the backing medium can change.

use cooksense_core::AppResult;

/// One JSON file per key with atomic replace
pub mod file;

/// Process-local storage, shared between clones
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String key/value store that outlives the session
pub trait DurableStorage: Send + Sync {
    /// Read the value under `key`, `None` if never written
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value under `key`; missing keys are not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}
