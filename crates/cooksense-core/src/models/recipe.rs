// ABOUTME: Recipe records returned by the generation endpoint and stored as favorites
// ABOUTME: Defines RecipeId with canonical string form, RecipeVersion and Substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use crate::constants::placeholders;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Recipe identifier in its canonical string form
///
/// Identifiers reach the client as JSON strings from fresh generations and,
/// in older favorites blobs, as JSON numbers. Both are normalized here so
/// `5` and `"5"` compare equal everywhere else without coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap an already-canonical identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Canonicalize a JSON scalar, if it can be an identifier at all
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
            }
            Value::Number(n) => Some(Self(lenient::number_to_string(n))),
            _ => None,
        }
    }

    /// Borrow the canonical string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid recipe id: {value}")))
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::from_value(&Value::from(id)).unwrap_or_else(|| Self(String::new()))
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self::from(id.as_str())
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

fn opt_recipe_id<'de, D>(deserializer: D) -> Result<Option<RecipeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(RecipeId::from_value))
}

/// One preparation of a recipe (standard or healthy)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeVersion {
    /// Estimated calories for the whole dish
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<f64>,
    /// Short description of this version
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub desc: Option<String>,
    /// Ingredient lines with quantities
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
    /// What changed relative to the standard version (healthy only)
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub adjustments: Vec<String>,
    /// Ordered preparation steps
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub steps: Vec<String>,
}

impl RecipeVersion {
    /// Stand-in rendered when the server omitted the healthy version
    #[must_use]
    pub fn healthy_fallback() -> Self {
        Self {
            steps: vec![placeholders::HEALTHY_DEFAULT_STEP.to_owned()],
            ..Self::default()
        }
    }

    /// Calories or zero
    #[must_use]
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }
}

/// Replacement for an ingredient the user does not have
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Ingredient called for but missing
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub missing: Option<String>,
    /// Suggested replacement
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub suggestion: Option<String>,
}

/// A generated recipe with its two versions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Client-assigned identifier; any server-supplied value is overwritten
    #[serde(
        default,
        deserialize_with = "opt_recipe_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecipeId>,
    /// Dish name
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Preparation time as free text
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    /// Difficulty as free text
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<String>,
    /// Number of portions
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub portions: Option<String>,
    /// Standard preparation
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub standard: Option<RecipeVersion>,
    /// Healthier preparation
    #[serde(
        default,
        deserialize_with = "lenient::opt_object",
        skip_serializing_if = "Option::is_none"
    )]
    pub healthy: Option<RecipeVersion>,
    /// Ingredient substitution hints
    #[serde(default, deserialize_with = "lenient::items")]
    pub substitutions: Vec<Substitution>,
}

impl Recipe {
    /// Whether this recipe carries the given identifier
    #[must_use]
    pub fn has_id(&self, id: &RecipeId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Name or the untitled placeholder
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or(placeholders::UNTITLED_RECIPE)
    }

    /// Standard version calories or zero
    #[must_use]
    pub fn standard_calories(&self) -> f64 {
        self.standard
            .as_ref()
            .map_or(0.0, RecipeVersion::calories_or_zero)
    }

    /// Standard version, or an empty one when absent
    #[must_use]
    pub fn standard_or_empty(&self) -> RecipeVersion {
        self.standard.clone().unwrap_or_default()
    }

    /// Healthy version, or the default "reduce oil and salt" stand-in
    #[must_use]
    pub fn healthy_or_fallback(&self) -> RecipeVersion {
        self.healthy
            .clone()
            .unwrap_or_else(RecipeVersion::healthy_fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids_normalize_equal() {
        let numeric: RecipeId = serde_json::from_value(json!(5)).unwrap();
        let text: RecipeId = serde_json::from_value(json!("5")).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(RecipeId::from(5_u64), RecipeId::from("5"));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = RecipeId::from(42_u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_partial_recipe_decodes() {
        let recipe: Recipe = serde_json::from_value(json!({
            "name": "Carrot Chicken Stir-fry",
            "portions": 2,
            "standard": {"calories": "350", "steps": null},
            "healthy": "not an object",
            "substitutions": [{"missing": "soy sauce"}, 7]
        }))
        .unwrap();

        assert_eq!(recipe.portions.as_deref(), Some("2"));
        assert!((recipe.standard_calories() - 350.0).abs() < f64::EPSILON);
        assert!(recipe.standard_or_empty().steps.is_empty());
        assert!(recipe.healthy.is_none());
        assert_eq!(recipe.substitutions.len(), 1);
        assert_eq!(recipe.substitutions[0].suggestion, None);
    }

    #[test]
    fn test_healthy_fallback_has_default_step() {
        let recipe = Recipe::default();
        let healthy = recipe.healthy_or_fallback();
        assert!(healthy.ingredients.is_empty());
        assert_eq!(healthy.steps, vec![placeholders::HEALTHY_DEFAULT_STEP]);
        assert_eq!(recipe.display_name(), placeholders::UNTITLED_RECIPE);
    }
}
