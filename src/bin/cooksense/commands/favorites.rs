// ABOUTME: Saved recipe commands for the cooksense CLI
// ABOUTME: Lists the persisted favorites and removes them by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense::app::AppSession;
use cooksense_core::models::RecipeId;
use cooksense_core::{AppError, AppResult};
use tracing::info;

use crate::helpers::display::display_favorites;

/// Print the saved recipes
pub fn list(session: &mut AppSession, detailed: bool, html: bool) {
    if html {
        if !session.is_favorites_panel_open() {
            session.toggle_favorites_panel();
        }
        let view = session.view();
        println!("{}", view.saved_count);
        println!("{}", view.favorites_panel.unwrap_or_default());
    } else {
        display_favorites(session.favorites().recipes(), detailed);
    }
}

/// Remove one saved recipe
pub fn remove(session: &mut AppSession, recipe_id: &str) -> AppResult<()> {
    let id = RecipeId::from(recipe_id);
    if !session.remove_favorite(&id)? {
        return Err(AppError::not_found(format!("saved recipe {id}")));
    }
    info!(id = %id, "saved recipe removed");
    println!("Removed {id}; {} saved", session.favorites().len());
    Ok(())
}
