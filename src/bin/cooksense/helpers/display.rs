// ABOUTME: Terminal formatting for recipes, favorites and calorie stats
// ABOUTME: Plain-text counterpart of the markup renderers used by every CLI command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense::calories::CalorieStats;
use cooksense::render::calories::remaining_text;
use cooksense::render::format_kcal;
use cooksense_core::constants::placeholders;
use cooksense_core::models::{ConsumedFoodEntry, Recipe, RecipeId, RecipeVersion};

fn meta(value: Option<&str>) -> &str {
    value.unwrap_or(placeholders::MISSING_META)
}

fn display_version(title: &str, version: &RecipeVersion) {
    println!("   {title} ({} kcal)", format_kcal(version.calories_or_zero()));
    if let Some(desc) = version.desc.as_deref() {
        println!("     {desc}");
    }
    for adjustment in &version.adjustments {
        println!("     * {adjustment}");
    }
    if !version.ingredients.is_empty() {
        println!("     Ingredients: {}", version.ingredients.join(", "));
    }
    for (step, text) in version.steps.iter().enumerate() {
        println!("     {}. {text}", step + 1);
    }
}

/// Display one recipe with both versions and its substitution hints
pub fn display_recipe(position: usize, recipe: &Recipe, saved: bool) {
    let heart = if saved { "[saved]" } else { "[ ]" };
    println!("\n{position}. {} {heart}", recipe.display_name());
    if let Some(id) = recipe.id.as_ref() {
        println!("   id: {id}");
    }
    println!(
        "   time: {} | difficulty: {} | portions: {}",
        meta(recipe.time.as_deref()),
        meta(recipe.difficulty.as_deref()),
        meta(recipe.portions.as_deref())
    );
    display_version("Standard", &recipe.standard_or_empty());
    display_version("Healthy", &recipe.healthy_or_fallback());

    if recipe.substitutions.is_empty() {
        println!("   Substitutions: {}", placeholders::NO_SUBSTITUTIONS);
    } else {
        let hints: Vec<String> = recipe
            .substitutions
            .iter()
            .map(|s| {
                format!(
                    "Missing {}? Try {}",
                    meta(s.missing.as_deref()),
                    meta(s.suggestion.as_deref())
                )
            })
            .collect();
        println!("   Substitutions: {}", hints.join(" | "));
    }
}

/// Display every result, or the no-results placeholder
pub fn display_recipes(recipes: &[Recipe], is_saved: impl Fn(&RecipeId) -> bool) {
    if recipes.is_empty() {
        println!("{}", placeholders::NO_RECIPES);
        return;
    }
    for (index, recipe) in recipes.iter().enumerate() {
        let saved = recipe.id.as_ref().is_some_and(&is_saved);
        display_recipe(index + 1, recipe, saved);
    }
}

/// Display the saved recipes
pub fn display_favorites(favorites: &[Recipe], detailed: bool) {
    if favorites.is_empty() {
        println!("{}", placeholders::NO_FAVORITES);
        return;
    }
    println!("Saved recipes ({}):", favorites.len());
    println!("{}", "=".repeat(60));
    for recipe in favorites {
        println!(
            "- {} | {} | {} kcal",
            recipe.display_name(),
            meta(recipe.time.as_deref()),
            format_kcal(recipe.standard_calories())
        );
        if let Some(id) = recipe.id.as_ref() {
            println!("  id: {id}");
        }
        if detailed {
            let standard = recipe.standard_or_empty();
            println!("  Ingredients: {}", standard.ingredients.join(", "));
            for (step, text) in standard.steps.iter().enumerate() {
                println!("  {}. {text}", step + 1);
            }
        }
    }
}

/// Display one recorded meal
pub fn display_entry(entry: &ConsumedFoodEntry) {
    let reason = if entry.reason.trim().is_empty() {
        placeholders::DEFAULT_REASON
    } else {
        entry.reason.as_str()
    };
    println!("{} - {} kcal", entry.name, format_kcal(entry.calories));
    println!("   {reason}");
}

/// Display target, total and remaining budget
pub fn display_stats(stats: &CalorieStats) {
    println!("{}", "-".repeat(40));
    println!("Daily target:  {} kcal", format_kcal(stats.target));
    println!("Consumed:      {} kcal", format_kcal(stats.total));
    println!("Remaining:     {}", remaining_text(stats));
}
