// ABOUTME: Wire payloads for the generation and fridge-scan endpoints
// ABOUTME: GenerateRequest mirrors the form fields, ScanResponse tolerates missing lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::intake::AgeGroup;
use super::lenient;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`, assembled fresh from the form at call time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Ingredients in insertion order
    pub ingredients: Vec<String>,
    /// Checked kitchenware options
    pub kitchenware: Vec<String>,
    /// Selected age group
    pub age_group: AgeGroup,
    /// Number of people to cook for
    pub people: u32,
    /// Cuisine preference
    pub cuisine: String,
    /// Difficulty preference
    pub difficulty: String,
    /// Free text listing foods to avoid
    pub avoid_foods: String,
    /// Calorie ceiling per dish, if any
    pub max_calories: Option<u32>,
}

/// Response of `POST /scan-fridge`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Recognised ingredient names
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_uses_camel_case() {
        let request = GenerateRequest {
            ingredients: vec!["carrot".to_owned()],
            kitchenware: vec!["wok".to_owned()],
            age_group: AgeGroup::Adult,
            people: 2,
            cuisine: "chinese".to_owned(),
            difficulty: "easy".to_owned(),
            avoid_foods: "peanuts".to_owned(),
            max_calories: Some(600),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["ageGroup"], json!("adult"));
        assert_eq!(value["avoidFoods"], json!("peanuts"));
        assert_eq!(value["maxCalories"], json!(600));
    }

    #[test]
    fn test_scan_response_without_ingredients() {
        let response: ScanResponse = serde_json::from_value(json!({"error": "x"})).unwrap();
        assert!(response.ingredients.is_empty());
    }
}
