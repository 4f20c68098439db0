// ABOUTME: Integration tests for the favorites store over file-backed storage
// ABOUTME: Validates persistence across sessions, corrupt-blob recovery and id assignment on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use cooksense::favorites::{FavoritesStore, LoadOutcome};
use cooksense::storage::{DurableStorage, FileStorage};
use cooksense_core::constants::storage::{FAVORITES_BACKUP_KEY, FAVORITES_KEY};
use cooksense_core::models::{Recipe, RecipeId};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn file_storage() -> (TempDir, Arc<FileStorage>) {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path().join("data")));
    (dir, storage)
}

fn named(name: &str) -> Recipe {
    Recipe {
        name: Some(name.to_owned()),
        ..Recipe::default()
    }
}

#[test]
fn test_favorites_survive_a_new_session() {
    let (_dir, storage) = file_storage();
    let (mut store, outcome) = FavoritesStore::load(storage.clone()).unwrap();
    assert_eq!(outcome, LoadOutcome::Empty);

    store.toggle(&RecipeId::from("r1"), &named("Curry")).unwrap();
    store.toggle(&RecipeId::from("r2"), &named("Salad")).unwrap();
    drop(store);

    let (reloaded, outcome) = FavoritesStore::load(storage).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            count: 2,
            skipped: 0
        }
    );
    let names: Vec<_> = reloaded.recipes().iter().map(Recipe::display_name).collect();
    assert_eq!(names, ["Curry", "Salad"]);
    assert!(reloaded.contains(&RecipeId::from("r2")));
}

#[test]
fn test_corrupt_blob_is_backed_up_and_reset() {
    let (_dir, storage) = file_storage();
    storage.set(FAVORITES_KEY, "{not json").unwrap();

    let (store, outcome) = FavoritesStore::load(storage.clone()).unwrap();
    assert_eq!(outcome, LoadOutcome::Reset);
    assert!(store.is_empty());
    assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(
        storage.get(FAVORITES_BACKUP_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn test_wrong_shape_is_treated_as_corrupt() {
    let (_dir, storage) = file_storage();
    storage.set(FAVORITES_KEY, r#"{"id":"r1"}"#).unwrap();

    let (_, outcome) = FavoritesStore::load(storage).unwrap();
    assert_eq!(outcome, LoadOutcome::Reset);
}

#[test]
fn test_unreadable_records_are_skipped_and_missing_ids_assigned() {
    let (_dir, storage) = file_storage();
    storage
        .set(FAVORITES_KEY, r#"[{"id":"r1","name":"Soup"}, 42, {"name":"No id"}]"#)
        .unwrap();

    let (store, outcome) = FavoritesStore::load(storage).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            count: 2,
            skipped: 1
        }
    );
    let assigned = store.recipes()[1].id.clone().unwrap();
    assert!(assigned.as_str().starts_with("recipe_"));
}

#[test]
fn test_dropped_records_are_backed_up_and_leave_the_mirror() {
    let (_dir, storage) = file_storage();
    storage
        .set(FAVORITES_KEY, r#"[{"id":"r1","name":"Soup"}, 42, "stray"]"#)
        .unwrap();

    let (_, outcome) = FavoritesStore::load(storage.clone()).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            count: 1,
            skipped: 2
        }
    );

    let backup: serde_json::Value =
        serde_json::from_str(&storage.get(FAVORITES_BACKUP_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(backup, serde_json::json!([42, "stray"]));

    let mirror: Vec<Recipe> =
        serde_json::from_str(&storage.get(FAVORITES_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(mirror.len(), 1);
    assert_eq!(mirror[0].id, Some(RecipeId::from("r1")));
}

#[test]
fn test_assigned_ids_are_stable_across_sessions() {
    let (_dir, storage) = file_storage();
    storage.set(FAVORITES_KEY, r#"[{"name":"Old soup"}]"#).unwrap();

    let (first, _) = FavoritesStore::load(storage.clone()).unwrap();
    let shown = first.recipes()[0].id.clone().unwrap();
    drop(first);

    let (mut second, outcome) = FavoritesStore::load(storage.clone()).unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            count: 1,
            skipped: 0
        }
    );
    assert_eq!(second.recipes()[0].id.as_ref(), Some(&shown));

    assert!(second.remove(&shown).unwrap());
    assert!(second.is_empty());
    assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_clean_blob_is_not_rewritten_on_load() {
    let (_dir, storage) = file_storage();
    let blob = r#"[{"id":"r1","name":"Soup"}]"#;
    storage.set(FAVORITES_KEY, blob).unwrap();

    FavoritesStore::load(storage.clone()).unwrap();
    assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some(blob));
    assert_eq!(storage.get(FAVORITES_BACKUP_KEY).unwrap(), None);
}

#[test]
fn test_file_lands_under_data_dir() {
    let (dir, storage) = file_storage();
    let (mut store, _) = FavoritesStore::load(storage).unwrap();
    store.toggle(&RecipeId::from("r1"), &named("Tacos")).unwrap();

    let path = dir.path().join("data").join(format!("{FAVORITES_KEY}.json"));
    let contents = fs::read_to_string(path).unwrap();
    let stored: Vec<Recipe> = serde_json::from_str(&contents).unwrap();
    assert_eq!(stored[0].id, Some(RecipeId::from("r1")));
}
