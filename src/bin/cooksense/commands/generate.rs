// ABOUTME: One-shot recipe generation command for the cooksense CLI
// ABOUTME: Fills the preference form from arguments, generates, and optionally saves results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense::app::AppSession;
use cooksense_core::models::AgeGroup;
use cooksense_core::{AppError, AppResult};
use tracing::{info, warn};

use crate::helpers::display::display_recipes;

/// Arguments of `cooksense generate`
pub struct GenerateOptions {
    pub ingredients: Vec<String>,
    pub kitchenware: Vec<String>,
    pub age_group: AgeGroup,
    pub people: u32,
    pub cuisine: String,
    pub difficulty: String,
    pub avoid_foods: String,
    pub max_calories: Option<u32>,
    pub save: Vec<usize>,
    pub html: bool,
}

/// Generate recipes and print them
pub async fn run(session: &mut AppSession, options: GenerateOptions) -> AppResult<()> {
    for ingredient in &options.ingredients {
        session.add_ingredient(ingredient);
    }
    session.set_age_group(options.age_group);

    let form = session.form_mut();
    for tool in &options.kitchenware {
        form.set_kitchenware(tool, true);
    }
    form.people = options.people;
    form.cuisine = options.cuisine;
    form.difficulty = options.difficulty;
    form.avoid_foods = options.avoid_foods;
    form.max_calories = options.max_calories;

    session.generate(false).await?;

    for position in options.save {
        save_position(session, position)?;
    }

    if options.html {
        println!("{}", session.view().results);
    } else {
        let favorites = session.favorites();
        display_recipes(session.results(), |id| favorites.contains(id));
    }
    Ok(())
}

/// Toggle the favorite state of the result at a 1-based position
pub fn save_position(session: &mut AppSession, position: usize) -> AppResult<()> {
    let id = position
        .checked_sub(1)
        .and_then(|index| session.results().get(index))
        .and_then(|recipe| recipe.id.clone())
        .ok_or_else(|| AppError::invalid_input(format!("no recipe at position {position}")))?;

    if session.favorites().contains(&id) {
        warn!(position, id = %id, "already saved, leaving it");
        return Ok(());
    }
    session.toggle_favorite(&id)?;
    info!(position, id = %id, "recipe saved");
    Ok(())
}
