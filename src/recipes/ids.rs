// ABOUTME: Recipe identifier generation from a millisecond timestamp and random base-36 suffix
// ABOUTME: Unique within a session by construction; collisions across sessions are negligible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Identifiers look like `recipe_1727384912345_xk3la9q0b`.
//!
//! This is not a content hash and not cryptographic: two clients generating
//! in the same millisecond collide only if they also draw the same 9-character
//! suffix (36^9, about 1e14 possibilities). The generator additionally retries
//! against identifiers the caller says are already taken.

use chrono::Utc;
use cooksense_core::models::RecipeId;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Produce one fresh identifier
#[must_use]
pub fn generate_recipe_id() -> RecipeId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    RecipeId::new(format!(
        "recipe_{}_{suffix}",
        Utc::now().timestamp_millis()
    ))
}

/// Produce an identifier for which `taken` returns false
pub fn generate_unique_recipe_id(taken: impl Fn(&RecipeId) -> bool) -> RecipeId {
    loop {
        let id = generate_recipe_id();
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = generate_recipe_id();
        let parts: Vec<&str> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "recipe");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_batch_is_unique() {
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = generate_unique_recipe_id(|candidate| seen.contains(candidate));
            assert!(seen.insert(id));
        }
    }
}
