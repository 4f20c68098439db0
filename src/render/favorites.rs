// ABOUTME: Favorites panel renderer and saved-count badge
// ABOUTME: Each item lists name, time and calories with an expandable ingredients/steps detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{attr, favorite_button, format_kcal, list_items, text};
use cooksense_core::constants::placeholders;
use cooksense_core::models::Recipe;

fn render_item(recipe: &Recipe) -> String {
    let standard = recipe.standard_or_empty();
    let (button, remove) = recipe.id.as_ref().map_or_else(
        || (String::new(), String::new()),
        |id| {
            (
                favorite_button(id, true),
                format!(
                    r#"<button class="remove-favorite-btn" data-remove-id="{}">&times;</button>"#,
                    attr(id.as_str())
                ),
            )
        },
    );
    format!(
        concat!(
            r#"<div class="favorite-item">"#,
            r#"<div class="favorite-head"><strong>{name}</strong>{button}{remove}</div>"#,
            r#"<div class="favorite-meta"><span>{time}</span><span>{kcal} kcal</span></div>"#,
            "<details><summary>Ingredients &amp; steps</summary>",
            "<p>{ingredients}</p><ol>{steps}</ol>",
            "</details>",
            "</div>"
        ),
        name = text(recipe.display_name()),
        button = button,
        remove = remove,
        time = text(recipe.time.as_deref().unwrap_or(placeholders::MISSING_META)),
        kcal = format_kcal(recipe.standard_calories()),
        ingredients = text(&standard.ingredients.join(", ")),
        steps = list_items(&standard.steps),
    )
}

/// Panel contents for the stored favorites, in stored order
#[must_use]
pub fn render_favorites_panel(favorites: &[Recipe]) -> String {
    if favorites.is_empty() {
        return format!(
            r#"<p class="no-favorites">{}</p>"#,
            text(placeholders::NO_FAVORITES)
        );
    }
    favorites.iter().map(render_item).collect()
}

/// Count badge text
#[must_use]
pub fn render_saved_count(count: usize) -> String {
    format!(r#"<span id="savedCount">{count}</span>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooksense_core::models::{RecipeId, RecipeVersion};

    #[test]
    fn test_item_lists_details_and_remove_control() {
        let recipe = Recipe {
            id: Some(RecipeId::from("r1")),
            name: Some("Soup".to_owned()),
            time: Some("30 min".to_owned()),
            standard: Some(RecipeVersion {
                calories: Some(210.0),
                ingredients: vec!["leek".to_owned(), "potato".to_owned()],
                steps: vec!["Boil".to_owned()],
                ..RecipeVersion::default()
            }),
            ..Recipe::default()
        };
        let html = render_favorites_panel(&[recipe]);
        assert!(html.contains("<strong>Soup</strong>"));
        assert!(html.contains("210 kcal"));
        assert!(html.contains("<p>leek, potato</p>"));
        assert!(html.contains("<li>Boil</li>"));
        assert!(html.contains(r#"data-remove-id="r1""#));
    }

    #[test]
    fn test_empty_panel_placeholder() {
        assert!(render_favorites_panel(&[]).contains(placeholders::NO_FAVORITES));
        assert_eq!(render_saved_count(2), r#"<span id="savedCount">2</span>"#);
    }
}
