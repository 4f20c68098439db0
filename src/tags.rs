// ABOUTME: Ingredient tag store: ordered, duplicate-free ingredient names
// ABOUTME: Owns the text-entry buffer that is cleared after every successful add
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

/// Ingredients entered by the user, in insertion order
///
/// Uniqueness is an exact, case-sensitive string match after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientTags {
    items: Vec<String>,
    entry: String,
}

impl IngredientTags {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trimmed, non-empty, not-yet-present value at the end
    ///
    /// Returns whether the value was inserted. A successful add clears the
    /// text-entry buffer.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        debug!(ingredient = value, "ingredient added");
        self.items.push(value.to_owned());
        self.entry.clear();
        true
    }

    /// Add whatever is currently typed in the entry buffer
    pub fn add_from_entry(&mut self) -> bool {
        let typed = self.entry.clone();
        self.add(&typed)
    }

    /// Remove every entry equal to `value`; returns how many were removed
    pub fn remove(&mut self, value: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        let removed = before - self.items.len();
        if removed > 0 {
            debug!(ingredient = value, "ingredient removed");
        }
        removed
    }

    /// Whether `value` is already listed
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Ingredients in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no ingredient has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text currently typed in the entry field
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Replace the typed text
    pub fn set_entry(&mut self, text: impl Into<String>) {
        self.entry = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedupes() {
        let mut tags = IngredientTags::new();
        assert!(tags.add("  carrot "));
        assert!(!tags.add("carrot"));
        assert!(tags.add("Carrot"));
        assert_eq!(tags.as_slice(), ["carrot", "Carrot"]);
    }

    #[test]
    fn test_blank_values_are_noops() {
        let mut tags = IngredientTags::new();
        assert!(!tags.add(""));
        assert!(!tags.add(" "));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_entry_cleared_only_on_success() {
        let mut tags = IngredientTags::new();
        tags.set_entry("egg");
        assert!(tags.add_from_entry());
        assert_eq!(tags.entry(), "");

        tags.set_entry("egg");
        assert!(!tags.add_from_entry());
        assert_eq!(tags.entry(), "egg");
    }

    #[test]
    fn test_remove_keeps_order_of_survivors() {
        let mut tags = IngredientTags::new();
        for item in ["a", "b", "c", "d"] {
            tags.add(item);
        }
        assert_eq!(tags.remove("b"), 1);
        assert_eq!(tags.remove("missing"), 0);
        assert_eq!(tags.as_slice(), ["a", "c", "d"]);
    }
}
