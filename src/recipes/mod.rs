// ABOUTME: Recipe session module: generation results and identifier assignment
// ABOUTME: Re-exports the session store and the id generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Timestamp plus random-suffix recipe identifiers
pub mod ids;

/// Current results and id lookup
pub mod session;

pub use ids::{generate_recipe_id, generate_unique_recipe_id};
pub use session::RecipeSession;
