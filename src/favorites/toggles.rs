// ABOUTME: Registry of on-screen favorite toggles across the results area and favorites panel
// ABOUTME: Keeps every toggle sharing a recipe id in the same state after a mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense_core::models::RecipeId;

/// Where a toggle is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// A recipe card in the result area
    Results,
    /// An item in the open favorites panel
    FavoritesPanel,
}

/// One heart button bound to a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    /// Recipe the button saves or unsaves
    pub recipe_id: RecipeId,
    /// Where it is drawn
    pub surface: Surface,
    /// Whether it shows the saved state
    pub active: bool,
}

/// Every favorite toggle currently on screen
#[derive(Debug, Clone, Default)]
pub struct ToggleRegistry {
    toggles: Vec<FavoriteToggle>,
}

impl ToggleRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all toggles of one surface after it was re-rendered
    pub fn replace_surface(
        &mut self,
        surface: Surface,
        toggles: impl IntoIterator<Item = (RecipeId, bool)>,
    ) {
        self.clear_surface(surface);
        self.toggles
            .extend(toggles.into_iter().map(|(recipe_id, active)| FavoriteToggle {
                recipe_id,
                surface,
                active,
            }));
    }

    /// Add toggles for a surface without touching the existing ones
    pub fn extend_surface(
        &mut self,
        surface: Surface,
        toggles: impl IntoIterator<Item = (RecipeId, bool)>,
    ) {
        self.toggles
            .extend(toggles.into_iter().map(|(recipe_id, active)| FavoriteToggle {
                recipe_id,
                surface,
                active,
            }));
    }

    /// Remove every toggle drawn on `surface`
    pub fn clear_surface(&mut self, surface: Surface) {
        self.toggles.retain(|toggle| toggle.surface != surface);
    }

    /// Set every toggle bound to `id` to `active`; returns how many changed
    pub fn sync(&mut self, id: &RecipeId, active: bool) -> usize {
        let mut changed = 0;
        for toggle in self.toggles.iter_mut().filter(|t| &t.recipe_id == id) {
            if toggle.active != active {
                toggle.active = active;
                changed += 1;
            }
        }
        changed
    }

    /// Toggles bound to `id`
    pub fn for_recipe<'a>(&'a self, id: &'a RecipeId) -> impl Iterator<Item = &'a FavoriteToggle> {
        self.toggles.iter().filter(move |toggle| &toggle.recipe_id == id)
    }

    /// Toggles drawn on `surface`
    pub fn on_surface(&self, surface: Surface) -> impl Iterator<Item = &FavoriteToggle> {
        self.toggles
            .iter()
            .filter(move |toggle| toggle.surface == surface)
    }

    /// Every toggle on screen
    #[must_use]
    pub fn all(&self) -> &[FavoriteToggle] {
        &self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_updates_all_surfaces() {
        let id = RecipeId::from("r1");
        let other = RecipeId::from("r2");
        let mut registry = ToggleRegistry::new();
        registry.replace_surface(Surface::Results, [(id.clone(), false), (other.clone(), false)]);
        registry.replace_surface(Surface::FavoritesPanel, [(id.clone(), false)]);

        assert_eq!(registry.sync(&id, true), 2);
        assert!(registry.for_recipe(&id).all(|toggle| toggle.active));
        assert!(registry.for_recipe(&other).all(|toggle| !toggle.active));
    }

    #[test]
    fn test_replace_surface_leaves_other_surface() {
        let id = RecipeId::from("r1");
        let mut registry = ToggleRegistry::new();
        registry.replace_surface(Surface::Results, [(id.clone(), true)]);
        registry.replace_surface(Surface::FavoritesPanel, [(id, true)]);
        registry.clear_surface(Surface::FavoritesPanel);

        assert_eq!(registry.on_surface(Surface::Results).count(), 1);
        assert_eq!(registry.on_surface(Surface::FavoritesPanel).count(), 0);
    }
}
