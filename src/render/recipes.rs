// ABOUTME: Recipe card renderer with standard and healthy versions side by side
// ABOUTME: Missing optional fields render as placeholders or empty sections, never as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{favorite_button, format_kcal, list_items, text};
use cooksense_core::constants::placeholders;
use cooksense_core::models::{Recipe, RecipeId, RecipeVersion, Substitution};

fn meta(value: Option<&str>) -> String {
    text(value.unwrap_or(placeholders::MISSING_META))
}

fn render_version(title: &str, class: &str, version: &RecipeVersion) -> String {
    let desc = version
        .desc
        .as_deref()
        .map(|desc| format!(r#"<p class="version-desc">{}</p>"#, text(desc)))
        .unwrap_or_default();
    let adjustments = if version.adjustments.is_empty() {
        String::new()
    } else {
        format!(
            r#"<ul class="adjustments">{}</ul>"#,
            list_items(&version.adjustments)
        )
    };
    format!(
        concat!(
            r#"<div class="version {class}"><h4>{title} <span class="kcal">{kcal} kcal</span></h4>"#,
            r#"{desc}{adjustments}"#,
            r#"<ul class="ingredients">{ingredients}</ul><ol class="steps">{steps}</ol></div>"#,
        ),
        class = class,
        title = title,
        kcal = format_kcal(version.calories_or_zero()),
        desc = desc,
        adjustments = adjustments,
        ingredients = list_items(&version.ingredients),
        steps = list_items(&version.steps),
    )
}

fn substitution_line(substitution: &Substitution) -> String {
    format!(
        "Missing {}? Try {}",
        text(substitution.missing.as_deref().unwrap_or(placeholders::MISSING_META)),
        text(substitution.suggestion.as_deref().unwrap_or(placeholders::MISSING_META)),
    )
}

fn render_substitutions(substitutions: &[Substitution]) -> String {
    let body = if substitutions.is_empty() {
        text(placeholders::NO_SUBSTITUTIONS)
    } else {
        substitutions
            .iter()
            .map(substitution_line)
            .collect::<Vec<_>>()
            .join(" | ")
    };
    format!(r#"<div class="substitutions">{body}</div>"#)
}

/// One recipe card; `index` is the card's position in the result area
#[must_use]
pub fn render_recipe_card(recipe: &Recipe, index: usize, saved: bool) -> String {
    let button = recipe
        .id
        .as_ref()
        .map(|id| favorite_button(id, saved))
        .unwrap_or_default();
    format!(
        concat!(
            r#"<div class="recipe-card" data-index="{index}">"#,
            r#"<div class="recipe-header"><h3>{name}</h3>{button}</div>"#,
            r#"<div class="recipe-meta">"#,
            r#"<span class="time">{time}</span>"#,
            r#"<span class="difficulty">{difficulty}</span>"#,
            r#"<span class="portions">{portions}</span>"#,
            "</div>",
            r#"<div class="versions">{standard}{healthy}</div>"#,
            "{substitutions}",
            "</div>"
        ),
        index = index,
        name = text(recipe.display_name()),
        button = button,
        time = meta(recipe.time.as_deref()),
        difficulty = meta(recipe.difficulty.as_deref()),
        portions = meta(recipe.portions.as_deref()),
        standard = render_version("Standard", "standard", &recipe.standard_or_empty()),
        healthy = render_version("Healthy", "healthy", &recipe.healthy_or_fallback()),
        substitutions = render_substitutions(&recipe.substitutions),
    )
}

/// Every card in order, or the no-results placeholder
#[must_use]
pub fn render_recipes(recipes: &[Recipe], is_saved: impl Fn(&RecipeId) -> bool) -> String {
    if recipes.is_empty() {
        return format!(
            r#"<p class="no-results">{}</p>"#,
            text(placeholders::NO_RECIPES)
        );
    }
    recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| {
            let saved = recipe.id.as_ref().is_some_and(&is_saved);
            render_recipe_card(recipe, index, saved)
        })
        .collect()
}
