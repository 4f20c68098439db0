// ABOUTME: Recipe preference form: kitchenware checklist, age group and dietary constraints
// ABOUTME: Snapshotted into a GenerateRequest at the moment generation is triggered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense_core::models::{AgeGroup, GenerateRequest};

/// Kitchenware offered as checkboxes, in display order
pub const KITCHENWARE_OPTIONS: [&str; 6] = [
    "stove",
    "oven",
    "microwave",
    "air fryer",
    "rice cooker",
    "wok",
];

/// One kitchenware checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenwareOption {
    /// Value sent to the server
    pub value: String,
    /// Whether the box is ticked
    pub checked: bool,
}

/// Current values of every preference input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    /// Kitchenware checklist
    pub kitchenware: Vec<KitchenwareOption>,
    /// Age-group selector, shared with the calorie tracker
    pub age_group: AgeGroup,
    /// People count
    pub people: u32,
    /// Cuisine selector
    pub cuisine: String,
    /// Difficulty selector
    pub difficulty: String,
    /// Foods to avoid, free text
    pub avoid_foods: String,
    /// Calorie ceiling; `None` when the field is empty
    pub max_calories: Option<u32>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            kitchenware: KITCHENWARE_OPTIONS
                .iter()
                .map(|value| KitchenwareOption {
                    value: (*value).to_owned(),
                    checked: false,
                })
                .collect(),
            age_group: AgeGroup::Adult,
            people: 1,
            cuisine: "any".to_owned(),
            difficulty: "any".to_owned(),
            avoid_foods: String::new(),
            max_calories: None,
        }
    }
}

impl RecipeForm {
    /// Tick or untick a kitchenware box, adding it if it is not listed
    pub fn set_kitchenware(&mut self, value: &str, checked: bool) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match self.kitchenware.iter_mut().find(|option| option.value == value) {
            Some(option) => option.checked = checked,
            None => self.kitchenware.push(KitchenwareOption {
                value: value.to_owned(),
                checked,
            }),
        }
    }

    /// Values of the ticked boxes in display order
    #[must_use]
    pub fn checked_kitchenware(&self) -> Vec<String> {
        self.kitchenware
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.value.clone())
            .collect()
    }

    /// Snapshot the form into a generation payload
    #[must_use]
    pub fn to_request(&self, ingredients: &[String]) -> GenerateRequest {
        GenerateRequest {
            ingredients: ingredients.to_vec(),
            kitchenware: self.checked_kitchenware(),
            age_group: self.age_group,
            people: self.people.max(1),
            cuisine: self.cuisine.clone(),
            difficulty: self.difficulty.clone(),
            avoid_foods: self.avoid_foods.trim().to_owned(),
            max_calories: self.max_calories.filter(|kcal| *kcal > 0),
        }
    }
}
