// ABOUTME: Ingredient chip renderer
// ABOUTME: One removable chip per ingredient, in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{attr, text};

/// Chips for the ingredient list
#[must_use]
pub fn render_tags(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|ingredient| {
            format!(
                r#"<div class="tag">{} <span class="tag-remove" data-ingredient="{}">&times;</span></div>"#,
                text(ingredient),
                attr(ingredient)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_chip_per_ingredient() {
        let html = render_tags(&["carrot".to_owned(), "chicken".to_owned()]);
        assert_eq!(html.matches(r#"class="tag""#).count(), 2);
        assert!(html.find("carrot").unwrap() < html.find("chicken").unwrap());
    }

    #[test]
    fn test_quotes_do_not_break_markup() {
        let html = render_tags(&[r#"chef's "special" <sauce>"#.to_owned()]);
        assert!(html.contains("&lt;sauce&gt;"));
        assert!(html.contains("&quot;special&quot;"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(render_tags(&[]).is_empty());
    }
}
