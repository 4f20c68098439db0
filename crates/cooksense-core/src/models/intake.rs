// ABOUTME: Calorie intake models: age-group tiers, daily targets and consumed entries
// ABOUTME: Converts the calorie-analysis response into an entry with display defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use crate::constants::{intake, placeholders};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age-group tier selecting the daily intake target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// Children and teenagers
    #[serde(alias = "youth")]
    Younger,
    /// Adults
    #[default]
    Adult,
    /// Seniors
    #[serde(alias = "elder")]
    Older,
}

impl AgeGroup {
    /// All tiers in display order
    pub const ALL: [Self; 3] = [Self::Younger, Self::Adult, Self::Older];

    /// Daily intake target for this tier in kcal
    #[must_use]
    pub const fn daily_intake_kcal(&self) -> f64 {
        match self {
            Self::Younger => intake::YOUNGER_KCAL,
            Self::Adult => intake::ADULT_KCAL,
            Self::Older => intake::OLDER_KCAL,
        }
    }

    /// Wire value sent to the generation endpoint
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Younger => "younger",
            Self::Adult => "adult",
            Self::Older => "older",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "younger" | "youth" => Ok(Self::Younger),
            "adult" => Ok(Self::Adult),
            "older" | "elder" => Ok(Self::Older),
            other => Err(AppError::invalid_input(format!(
                "unknown age group '{other}' (expected younger, adult or older)"
            ))),
        }
    }
}

/// One analysed food photo, appended to the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedFoodEntry {
    /// Recognised dish name
    pub name: String,
    /// Estimated calories
    pub calories: f64,
    /// Model explanation of the estimate
    pub reason: String,
}

/// Response of the calorie-analysis endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    /// Recognised dish name
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub food_name: Option<String>,
    /// Estimated calories
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub estimated_calories: Option<f64>,
    /// Explanation of the estimate
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub reasoning: Option<String>,
}

impl CalorieEstimate {
    /// Apply display defaults and produce a history entry
    #[must_use]
    pub fn into_entry(self) -> ConsumedFoodEntry {
        ConsumedFoodEntry {
            name: self
                .food_name
                .unwrap_or_else(|| placeholders::UNKNOWN_FOOD.to_owned()),
            calories: self.estimated_calories.unwrap_or(0.0),
            reason: self.reasoning.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_daily_intake_table() {
        assert!((AgeGroup::Younger.daily_intake_kcal() - 1800.0).abs() < f64::EPSILON);
        assert!((AgeGroup::Adult.daily_intake_kcal() - 2200.0).abs() < f64::EPSILON);
        assert!((AgeGroup::Older.daily_intake_kcal() - 1600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_age_group_aliases() {
        assert_eq!("youth".parse::<AgeGroup>().unwrap(), AgeGroup::Younger);
        assert_eq!(" Elder ".parse::<AgeGroup>().unwrap(), AgeGroup::Older);
        assert!("toddler".parse::<AgeGroup>().is_err());

        let parsed: AgeGroup = serde_json::from_value(json!("elder")).unwrap();
        assert_eq!(parsed, AgeGroup::Older);
    }

    #[test]
    fn test_estimate_defaults() {
        let estimate: CalorieEstimate = serde_json::from_value(json!({})).unwrap();
        let entry = estimate.into_entry();
        assert_eq!(entry.name, placeholders::UNKNOWN_FOOD);
        assert!(entry.calories.abs() < f64::EPSILON);
        assert!(entry.reason.is_empty());
    }
}
