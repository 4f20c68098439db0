// ABOUTME: File-backed durable storage writing one file per key under the data directory
// ABOUTME: Writes go through a temp file in the same directory and are persisted atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DurableStorage;
use cooksense_core::{AppError, AppResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for keys that would escape the directory
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "storage key '{key}' is not a plain file name"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DurableStorage for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("read {}: {e}", path.display())).with_source(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| {
            AppError::storage(format!("persist {}: {}", path.display(), e.error))
                .with_source(e.error)
        })?;

        debug!(key, bytes = value.len(), "storage key written");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_and_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("cooksense_saved").unwrap(), None);
        storage.set("cooksense_saved", "[]").unwrap();
        assert_eq!(storage.get("cooksense_saved").unwrap().as_deref(), Some("[]"));

        storage.remove("cooksense_saved").unwrap();
        storage.remove("cooksense_saved").unwrap();
        assert_eq!(storage.get("cooksense_saved").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let storage = FileStorage::new("/tmp/unused");
        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for(".hidden").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.path_for("cooksense_saved.corrupt").is_ok());
    }
}
