// ABOUTME: Pure markup projections of session state
// ABOUTME: Every free-text value is HTML-escaped; no structured data is embedded in attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Markup renderers
//!
//! Each function maps state to a string and has no side effects. Buttons
//! carry only an escaped `data-id`; the session resolves the identifier back
//! to a recipe record, so no serialized recipe ever travels through markup.

/// Calorie stats panel and meal history
pub mod calories;

/// Favorites panel and count badge
pub mod favorites;

/// Recipe cards
pub mod recipes;

/// Ingredient chips
pub mod tags;

pub use calories::{render_entry, render_history, render_stats};
pub use favorites::{render_favorites_panel, render_saved_count};
pub use recipes::{render_recipe_card, render_recipes};
pub use tags::render_tags;

use cooksense_core::models::RecipeId;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Escape text placed between tags
pub(crate) fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// Escape a value placed inside a double-quoted attribute
pub(crate) fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

/// Calories without a trailing `.0` for whole numbers
#[must_use]
pub fn format_kcal(kcal: f64) -> String {
    if kcal.fract() == 0.0 && kcal.abs() < 1e15 {
        format!("{}", kcal as i64)
    } else {
        format!("{kcal:.1}")
    }
}

/// Heart button bound to a recipe id
pub(crate) fn favorite_button(id: &RecipeId, saved: bool) -> String {
    format!(
        r#"<button class="save-recipe-btn{active}" data-id="{id}" aria-pressed="{saved}"><i class="{icon} fa-heart"></i></button>"#,
        active = if saved { " active" } else { "" },
        id = attr(id.as_str()),
        icon = if saved { "fas" } else { "far" },
    )
}

/// `<li>` items for a list of free-text lines
pub(crate) fn list_items(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("<li>{}</li>", text(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kcal() {
        assert_eq!(format_kcal(350.0), "350");
        assert_eq!(format_kcal(-120.0), "-120");
        assert_eq!(format_kcal(12.34), "12.3");
    }

    #[test]
    fn test_favorite_button_escapes_id() {
        let html = favorite_button(&RecipeId::from(r#"a"b"#), true);
        assert!(html.contains(r#"data-id="a&quot;b""#));
        assert!(html.contains("save-recipe-btn active"));
        assert!(html.contains("fas fa-heart"));
    }
}
