// ABOUTME: Recipe session holding the current generation results and their id lookup
// ABOUTME: Assigns a fresh identifier to every received record before it is rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ids::generate_unique_recipe_id;
use cooksense_core::models::{Recipe, RecipeId};
use std::collections::HashMap;
use std::ops::Range;
use tracing::debug;

/// Recipes currently shown in the result area
#[derive(Debug, Clone, Default)]
pub struct RecipeSession {
    results: Vec<Recipe>,
    lookup: HashMap<RecipeId, usize>,
}

impl RecipeSession {
    /// Empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a successful generation response
    ///
    /// Without `append`, previous results and the lookup are dropped first.
    /// Every record gets a new identifier, overwriting anything the server
    /// sent. Returns the index range of the new batch within [`Self::results`].
    pub fn accept(&mut self, batch: Vec<Recipe>, append: bool) -> Range<usize> {
        if !append {
            self.clear();
        }

        let start = self.results.len();
        for mut recipe in batch {
            let id = generate_unique_recipe_id(|candidate| self.lookup.contains_key(candidate));
            recipe.id = Some(id.clone());
            self.lookup.insert(id, self.results.len());
            self.results.push(recipe);
        }

        debug!(
            added = self.results.len() - start,
            total = self.results.len(),
            append,
            "generation results accepted"
        );
        start..self.results.len()
    }

    /// Drop all results and the lookup
    pub fn clear(&mut self) {
        self.results.clear();
        self.lookup.clear();
    }

    /// Find a shown recipe by identifier
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.lookup.get(id).and_then(|index| self.results.get(*index))
    }

    /// All shown recipes in display order
    #[must_use]
    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Number of shown recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing is shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
