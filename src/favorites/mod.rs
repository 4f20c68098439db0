// ABOUTME: Favorites module: persisted recipe list and on-screen toggle synchronization
// ABOUTME: Re-exports the store, its load outcome and the toggle registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Persisted favorites list
pub mod store;

/// Heart buttons currently on screen
pub mod toggles;

pub use store::{FavoritesStore, LoadOutcome};
pub use toggles::{FavoriteToggle, Surface, ToggleRegistry};
