// ABOUTME: Application session owning every state unit, control and request flow
// ABOUTME: Failures surface as one alert and leave state at its pre-call value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application session
//!
//! [`AppSession`] is the single owner of the ingredient tags, calorie
//! tracker, preference form, generation results and favorites. Each request
//! flow holds its triggering control busy through a [`BusyGuard`], so the
//! control is released on success, failure and early return alike.

use crate::api::{HttpRecipeApi, ImageUpload, RecipeApi};
use crate::calories::{CalorieStats, CalorieTracker};
use crate::config::ClientConfig;
use crate::favorites::{FavoritesStore, LoadOutcome, Surface, ToggleRegistry};
use crate::recipes::RecipeSession;
use crate::render;
use crate::storage::{DurableStorage, FileStorage};
use crate::tags::IngredientTags;
use crate::ui::{BusyGuard, Control, Notifier, RecipeForm, TracingNotifier};
use cooksense_core::constants::{alerts, labels};
use cooksense_core::models::{AgeGroup, ConsumedFoodEntry, Recipe, RecipeId};
use cooksense_core::{AppError, AppResult};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Triggering controls and indicators
#[derive(Debug, Clone)]
pub struct SessionControls {
    /// Fridge camera button
    pub scan: Control,
    /// Meal camera button
    pub calories: Control,
    /// Generate button
    pub generate: Control,
    /// Loader shown while a generation runs
    pub loader: Control,
    /// Load-more button, shown once results exist
    pub load_more: Control,
}

impl Default for SessionControls {
    fn default() -> Self {
        Self {
            scan: Control::new("scan", labels::SCAN_IDLE, labels::SCAN_BUSY),
            calories: Control::new("calories", labels::CALORIES_IDLE, labels::CALORIES_BUSY),
            generate: Control::new("generate", labels::GENERATE_IDLE, labels::GENERATE_BUSY),
            loader: Control::indicator("loader", labels::LOADER),
            load_more: Control::new("load_more", labels::LOAD_MORE, labels::GENERATE_BUSY).hidden(),
        }
    }
}

/// Markup for every region of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct AppView {
    /// Ingredient chips
    pub tags: String,
    /// Recipe cards or the no-results placeholder
    pub results: String,
    /// Calorie target, total and remaining
    pub stats: CalorieStats,
    /// Calorie stats markup
    pub stats_markup: String,
    /// Meal history
    pub history: String,
    /// Favorites panel contents, `None` while the panel is closed
    pub favorites_panel: Option<String>,
    /// Count badge
    pub saved_count: String,
}

/// One user session
pub struct AppSession {
    api: Arc<dyn RecipeApi>,
    notifier: Arc<dyn Notifier>,
    tags: IngredientTags,
    calories: CalorieTracker,
    form: RecipeForm,
    recipes: RecipeSession,
    favorites: FavoritesStore,
    toggles: ToggleRegistry,
    controls: SessionControls,
    panel_open: bool,
}

impl fmt::Debug for AppSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSession")
            .field("tags", &self.tags)
            .field("results", &self.recipes.len())
            .field("favorites", &self.favorites)
            .field("panel_open", &self.panel_open)
            .finish_non_exhaustive()
    }
}

impl AppSession {
    /// Session over the given endpoint client, storage and alert channel
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the favorites cannot be read at all.
    /// Unreadable favorites content is reset, not reported.
    pub fn new(
        api: Arc<dyn RecipeApi>,
        storage: Arc<dyn DurableStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        let (favorites, outcome) = FavoritesStore::load(storage)?;
        if outcome == LoadOutcome::Reset {
            warn!("saved favorites were unreadable and have been reset");
        }

        let form = RecipeForm::default();
        info!(favorites = favorites.len(), "session started");
        Ok(Self {
            api,
            notifier,
            tags: IngredientTags::new(),
            calories: CalorieTracker::new(form.age_group),
            form,
            recipes: RecipeSession::new(),
            favorites,
            toggles: ToggleRegistry::new(),
            controls: SessionControls::default(),
            panel_open: false,
        })
    }

    /// Session over the HTTP client and file storage named by `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for unusable endpoint URLs and `StorageError`
    /// if the favorites file cannot be read
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let api = HttpRecipeApi::new(config)?;
        let storage = FileStorage::new(config.data_dir.clone());
        Self::new(Arc::new(api), Arc::new(storage), Arc::new(TracingNotifier))
    }

    // ------------------------------------------------------------------
    // Ingredients, form and age group
    // ------------------------------------------------------------------

    /// Ingredient list
    #[must_use]
    pub const fn tags(&self) -> &IngredientTags {
        &self.tags
    }

    /// Mutable ingredient list
    pub fn tags_mut(&mut self) -> &mut IngredientTags {
        &mut self.tags
    }

    /// Add one ingredient; returns whether it was new
    pub fn add_ingredient(&mut self, value: &str) -> bool {
        self.tags.add(value)
    }

    /// Remove an ingredient by value; returns how many were removed
    pub fn remove_ingredient(&mut self, value: &str) -> usize {
        self.tags.remove(value)
    }

    /// Preference form
    #[must_use]
    pub const fn form(&self) -> &RecipeForm {
        &self.form
    }

    /// Mutable preference form
    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    /// Change the age group for both the form and the calorie target
    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.form.age_group = age_group;
        self.calories.set_age_group(age_group);
    }

    /// Calorie tracker
    #[must_use]
    pub const fn calories(&self) -> &CalorieTracker {
        &self.calories
    }

    /// Controls and indicators
    #[must_use]
    pub const fn controls(&self) -> &SessionControls {
        &self.controls
    }

    // ------------------------------------------------------------------
    // Request flows
    // ------------------------------------------------------------------

    /// Send a fridge photo and add every recognised ingredient
    ///
    /// An empty upload is ignored. Returns how many new ingredients were
    /// added; an empty recognition result raises an alert and adds nothing.
    ///
    /// # Errors
    ///
    /// Returns the endpoint error after alerting; the ingredient list is
    /// left untouched
    pub async fn scan_fridge(&mut self, image: &ImageUpload) -> AppResult<usize> {
        if image.is_empty() {
            debug!("empty fridge photo ignored");
            return Ok(0);
        }

        let _busy = BusyGuard::acquire(&mut self.controls.scan);
        let recognised = match self.api.scan_fridge(image).await {
            Ok(recognised) => recognised,
            Err(e) => {
                warn!(error = %e, "fridge scan failed");
                self.notifier.alert(alerts::SCAN_FAILED);
                return Err(e);
            }
        };

        if recognised.is_empty() {
            self.notifier.alert(alerts::NOTHING_RECOGNIZED);
            return Ok(0);
        }

        let added = recognised
            .iter()
            .filter(|ingredient| self.tags.add(ingredient))
            .count();
        info!(recognised = recognised.len(), added, "fridge scan complete");
        Ok(added)
    }

    /// Send a meal photo and record the estimate in the calorie tracker
    ///
    /// Returns the recorded entry, or `None` for an empty upload.
    ///
    /// # Errors
    ///
    /// Returns the endpoint error after alerting; nothing is recorded
    pub async fn analyze_calories(
        &mut self,
        image: &ImageUpload,
    ) -> AppResult<Option<ConsumedFoodEntry>> {
        if image.is_empty() {
            debug!("empty meal photo ignored");
            return Ok(None);
        }

        let _busy = BusyGuard::acquire(&mut self.controls.calories);
        let estimate = match self.api.analyze_calories(image).await {
            Ok(estimate) => estimate,
            Err(e) => {
                warn!(error = %e, "calorie analysis failed");
                self.notifier.alert(alerts::CALORIES_FAILED);
                return Err(e);
            }
        };

        let entry = self.calories.push(estimate.into_entry()).clone();
        info!(
            food = %entry.name,
            calories = entry.calories,
            remaining = self.calories.stats().remaining,
            "meal recorded"
        );
        Ok(Some(entry))
    }

    /// Request recipes for the current ingredients and form values
    ///
    /// With `append`, the new batch is added after the current results;
    /// otherwise it replaces them. Results only change once a response has
    /// been decoded. Returns the size of the received batch.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without sending anything when no ingredients
    /// are listed, or the endpoint error; both raise an alert first
    pub async fn generate(&mut self, append: bool) -> AppResult<usize> {
        if self.tags.is_empty() {
            self.notifier.alert(alerts::NO_INGREDIENTS);
            return Err(AppError::invalid_input("no ingredients listed"));
        }

        let request = self.form.to_request(self.tags.as_slice());
        let response = {
            let _loader = BusyGuard::acquire(&mut self.controls.loader);
            let _busy = BusyGuard::acquire(&mut self.controls.generate);
            let _more = if append {
                Some(BusyGuard::acquire(&mut self.controls.load_more))
            } else {
                None
            };
            self.api.generate(&request).await
        };

        let batch = match response {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, append, "recipe generation failed");
                self.notifier.alert(alerts::GENERATE_FAILED);
                return Err(e);
            }
        };

        let received = batch.len();
        let range = self.recipes.accept(batch, append);
        let favorites = &self.favorites;
        let new_toggles = self.recipes.results()[range]
            .iter()
            .filter_map(|recipe| recipe.id.clone())
            .map(|id| {
                let saved = favorites.contains(&id);
                (id, saved)
            })
            .collect::<Vec<_>>();
        if append {
            self.toggles.extend_surface(Surface::Results, new_toggles);
        } else {
            self.toggles.replace_surface(Surface::Results, new_toggles);
        }
        self.controls
            .load_more
            .set_visible(!self.recipes.is_empty());

        info!(received, total = self.recipes.len(), append, "recipes generated");
        Ok(received)
    }

    /// Fetch another batch and append it to the current results
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`]
    pub async fn load_more(&mut self) -> AppResult<usize> {
        self.generate(true).await
    }

    /// Current generation results
    #[must_use]
    pub fn results(&self) -> &[Recipe] {
        self.recipes.results()
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Save or unsave the recipe with `id`
    ///
    /// The record is resolved from the current results first and the
    /// favorites list second. Every on-screen toggle for `id` follows the new
    /// state. Returns whether the recipe is now saved.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or `StorageError` after
    /// alerting when the list could not be persisted (nothing changes)
    pub fn toggle_favorite(&mut self, id: &RecipeId) -> AppResult<bool> {
        let recipe = self
            .recipes
            .get(id)
            .or_else(|| self.favorites.get(id))
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("recipe {id}")))?;

        let saved = match self.favorites.toggle(id, &recipe) {
            Ok(saved) => saved,
            Err(e) => {
                self.notifier.alert(alerts::SAVE_FAILED);
                return Err(e);
            }
        };
        self.after_favorites_change(id, saved);
        Ok(saved)
    }

    /// Delete the favorite with `id`; returns whether one was removed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` after alerting when the list could not be
    /// persisted (nothing changes)
    pub fn remove_favorite(&mut self, id: &RecipeId) -> AppResult<bool> {
        let removed = match self.favorites.remove(id) {
            Ok(removed) => removed,
            Err(e) => {
                self.notifier.alert(alerts::SAVE_FAILED);
                return Err(e);
            }
        };
        if removed {
            self.after_favorites_change(id, false);
        }
        Ok(removed)
    }

    fn after_favorites_change(&mut self, id: &RecipeId, saved: bool) {
        if self.panel_open {
            self.refresh_panel_toggles();
        }
        let changed = self.toggles.sync(id, saved);
        debug!(id = %id, saved, toggles = changed, "favorite toggles synced");
    }

    fn refresh_panel_toggles(&mut self) {
        let ids = self
            .favorites
            .recipes()
            .iter()
            .filter_map(|recipe| recipe.id.clone())
            .map(|id| (id, true))
            .collect::<Vec<_>>();
        self.toggles.replace_surface(Surface::FavoritesPanel, ids);
    }

    /// Open or close the favorites panel; returns whether it is now open
    pub fn toggle_favorites_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            self.refresh_panel_toggles();
        } else {
            self.toggles.clear_surface(Surface::FavoritesPanel);
        }
        self.panel_open
    }

    /// Whether the favorites panel is open
    #[must_use]
    pub const fn is_favorites_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Stored favorites
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Favorite toggles currently on screen
    #[must_use]
    pub const fn toggles(&self) -> &ToggleRegistry {
        &self.toggles
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render every screen region from current state
    #[must_use]
    pub fn view(&self) -> AppView {
        let stats = self.calories.stats();
        AppView {
            tags: render::render_tags(self.tags.as_slice()),
            results: render::render_recipes(self.recipes.results(), |id| {
                self.favorites.contains(id)
            }),
            stats,
            stats_markup: render::render_stats(&stats),
            history: render::render_history(self.calories.entries()),
            favorites_panel: self
                .panel_open
                .then(|| render::render_favorites_panel(self.favorites.recipes())),
            saved_count: render::render_saved_count(self.favorites.len()),
        }
    }
}
