// ABOUTME: Favorites store: full recipe records mirrored to one durable storage key
// ABOUTME: Every mutation rewrites the mirror; a failed write rolls the list back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::recipes::generate_unique_recipe_id;
use crate::storage::DurableStorage;
use cooksense_core::constants::storage::{FAVORITES_BACKUP_KEY, FAVORITES_KEY};
use cooksense_core::models::{Recipe, RecipeId};
use cooksense_core::AppResult;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened to the favorites blob during [`FavoritesStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet
    Empty,
    /// Blob decoded; `skipped` records were unreadable and dropped
    Loaded {
        /// Records decoded
        count: usize,
        /// Records dropped
        skipped: usize,
    },
    /// Blob was not a JSON array; it was backed up and the list reset
    Reset,
}

/// Persisted favorites, in the order they were saved
pub struct FavoritesStore {
    recipes: Vec<Recipe>,
    storage: Arc<dyn DurableStorage>,
    key: String,
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("recipes", &self.recipes.len())
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// Load the favorites list from storage under the standard key
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read. Unreadable
    /// content is not an error; see [`LoadOutcome::Reset`].
    pub fn load(storage: Arc<dyn DurableStorage>) -> AppResult<(Self, LoadOutcome)> {
        Self::load_key(storage, FAVORITES_KEY)
    }

    /// Load from an explicit key
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read
    pub fn load_key(
        storage: Arc<dyn DurableStorage>,
        key: &str,
    ) -> AppResult<(Self, LoadOutcome)> {
        let mut store = Self {
            recipes: Vec::new(),
            storage,
            key: key.to_owned(),
        };

        let Some(blob) = store.storage.get(key)? else {
            debug!(key, "no favorites stored yet");
            return Ok((store, LoadOutcome::Empty));
        };

        let outcome = match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Array(entries)) => store.adopt(entries),
            Ok(_) | Err(_) => {
                store.reset_corrupt(&blob);
                LoadOutcome::Reset
            }
        };
        info!(key, ?outcome, "favorites loaded");
        Ok((store, outcome))
    }

    fn adopt(&mut self, entries: Vec<Value>) -> LoadOutcome {
        let mut dropped = Vec::new();
        let mut assigned = 0_usize;
        for entry in entries {
            let Ok(mut recipe) = Recipe::deserialize(&entry) else {
                dropped.push(entry);
                continue;
            };
            if recipe.id.is_none() {
                recipe.id = Some(generate_unique_recipe_id(|candidate| {
                    self.contains(candidate)
                }));
                assigned += 1;
            }
            self.recipes.push(recipe);
        }

        let skipped = dropped.len();
        if skipped > 0 {
            warn!(
                skipped,
                backup = FAVORITES_BACKUP_KEY,
                "dropped unreadable favorite records; backing them up"
            );
            self.back_up_dropped(&dropped);
        }
        // Assigned ids stay stable across loads; dropped records leave the mirror
        if assigned > 0 || skipped > 0 {
            debug!(assigned, skipped, "rewriting normalized favorites");
            if let Err(e) = self.persist() {
                warn!(error = %e, "could not rewrite normalized favorites");
            }
        }

        LoadOutcome::Loaded {
            count: self.recipes.len(),
            skipped,
        }
    }

    fn back_up_dropped(&self, dropped: &[Value]) {
        let written = serde_json::to_string(dropped)
            .map_err(Into::into)
            .and_then(|blob| self.storage.set(FAVORITES_BACKUP_KEY, &blob));
        if let Err(e) = written {
            warn!(error = %e, "could not back up unreadable favorite records");
        }
    }

    fn reset_corrupt(&self, blob: &str) {
        warn!(
            key = %self.key,
            backup = FAVORITES_BACKUP_KEY,
            "favorites blob is unreadable; backing it up and starting empty"
        );
        if let Err(e) = self.storage.set(FAVORITES_BACKUP_KEY, blob) {
            warn!(error = %e, "could not back up unreadable favorites");
        }
        if let Err(e) = self.storage.set(&self.key, "[]") {
            warn!(error = %e, "could not reset favorites blob");
        }
    }

    /// Whether a favorite with this identifier exists
    #[must_use]
    pub fn contains(&self, id: &RecipeId) -> bool {
        self.recipes.iter().any(|recipe| recipe.has_id(id))
    }

    /// Find a favorite by identifier
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.has_id(id))
    }

    /// Add `recipe` under `id` if absent, otherwise remove the entry with `id`
    ///
    /// Returns the new membership state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mirror cannot be written; the list is
    /// then left exactly as it was before the call
    pub fn toggle(&mut self, id: &RecipeId, recipe: &Recipe) -> AppResult<bool> {
        let previous = self.recipes.clone();
        let saved = if self.contains(id) {
            self.recipes.retain(|stored| !stored.has_id(id));
            false
        } else {
            let mut record = recipe.clone();
            record.id = Some(id.clone());
            self.recipes.push(record);
            true
        };

        self.commit(previous)?;
        debug!(id = %id, saved, count = self.recipes.len(), "favorite toggled");
        Ok(saved)
    }

    /// Remove the favorite with `id`; returns whether anything was removed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the mirror cannot be written; the list is
    /// then left exactly as it was before the call
    pub fn remove(&mut self, id: &RecipeId) -> AppResult<bool> {
        let previous = self.recipes.clone();
        self.recipes.retain(|stored| !stored.has_id(id));
        let removed = self.recipes.len() != previous.len();

        self.commit(previous)?;
        debug!(id = %id, removed, count = self.recipes.len(), "favorite removed");
        Ok(removed)
    }

    fn persist(&self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.recipes)?;
        self.storage.set(&self.key, &blob)
    }

    fn commit(&mut self, previous: Vec<Recipe>) -> AppResult<()> {
        if let Err(e) = self.persist() {
            warn!(error = %e, "favorites not persisted; rolling back");
            self.recipes = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Favorites in saved order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of favorites (the count badge)
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether nothing is saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: Some(name.to_owned()),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let storage = MemoryStorage::with_value(FAVORITES_KEY, r#"[{"id":"a","name":"Soup"}]"#);
        let (mut store, _) = FavoritesStore::load(Arc::new(storage.clone())).unwrap();
        let before = store.recipes().to_vec();

        let id = RecipeId::from("b");
        assert!(store.toggle(&id, &recipe("Salad")).unwrap());
        assert_eq!(store.len(), 2);
        assert!(!store.toggle(&id, &recipe("Salad")).unwrap());

        assert_eq!(store.recipes(), before.as_slice());
        let persisted: Vec<Recipe> =
            serde_json::from_str(&storage.get(FAVORITES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, before);
    }

    #[test]
    fn test_numeric_ids_match_string_ids() {
        let storage = MemoryStorage::with_value(FAVORITES_KEY, r#"[{"id":5,"name":"Stew"}]"#);
        let (mut store, _) = FavoritesStore::load(Arc::new(storage)).unwrap();

        assert!(store.contains(&RecipeId::from("5")));
        assert!(store.remove(&RecipeId::from("5")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let storage = MemoryStorage::new();
        let (mut store, outcome) = FavoritesStore::load(Arc::new(storage.clone())).unwrap();
        assert_eq!(outcome, LoadOutcome::Empty);

        storage.set_read_only(true);
        assert!(store.toggle(&RecipeId::from("x"), &recipe("Pie")).is_err());
        assert!(store.is_empty());
        assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
    }
}
