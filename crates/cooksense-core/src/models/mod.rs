// ABOUTME: Core data models for recipes, recipe identifiers and calorie intake
// ABOUTME: Re-exports the recipe, intake and request types used across the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tolerant deserializers for server-supplied records
pub mod lenient;

/// Recipe, recipe versions, substitutions and identifiers
pub mod recipe;

/// Age groups, daily intake targets and consumed food entries
pub mod intake;

/// Request and response payloads exchanged with the endpoints
pub mod request;

pub use intake::{AgeGroup, CalorieEstimate, ConsumedFoodEntry};
pub use recipe::{Recipe, RecipeId, RecipeVersion, Substitution};
pub use request::{GenerateRequest, ScanResponse};
