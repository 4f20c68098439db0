// ABOUTME: Integration tests for the ingredient tag store and calorie tracker
// ABOUTME: Validates ordering, deduplication, entry buffer handling and budget arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cooksense::calories::CalorieTracker;
use cooksense::render::{render_history, render_stats, render_tags};
use cooksense::tags::IngredientTags;
use cooksense_core::models::AgeGroup;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

const POOL: [&str; 8] = [
    "tomato", "basil", "garlic", "Garlic", "egg", "rice", "leek", "tofu",
];

#[test]
fn test_tags_keep_insertion_order_and_reject_duplicates() {
    let mut tags = IngredientTags::new();
    assert!(tags.add("  tomato "));
    assert!(tags.add("basil"));
    assert!(!tags.add("tomato"));
    assert!(!tags.add("   "));
    assert_eq!(tags.as_slice(), ["tomato", "basil"]);

    assert_eq!(tags.remove("tomato"), 1);
    assert_eq!(tags.remove("tomato"), 0);
    assert_eq!(tags.as_slice(), ["basil"]);
}

#[test]
fn test_mixed_add_remove_sequences_stay_unique_and_ordered() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tags = IngredientTags::new();
        let mut added_at: HashMap<String, usize> = HashMap::new();

        for step in 0..200 {
            let name = POOL[rng.gen_range(0..POOL.len())];
            if rng.gen_bool(0.6) {
                let padded = match rng.gen_range(0..3) {
                    0 => name.to_owned(),
                    1 => format!("  {name}"),
                    _ => format!("{name}\t "),
                };
                let was_listed = tags.contains(name);
                assert_eq!(tags.add(&padded), !was_listed, "seed {seed} step {step}");
                added_at.entry(name.to_owned()).or_insert(step);
            } else {
                tags.remove(name);
                added_at.remove(name);
                assert!(!tags.contains(name), "seed {seed} step {step}");
            }
            if rng.gen_ratio(1, 10) {
                assert!(!tags.add(if rng.gen_bool(0.5) { "" } else { "   " }));
            }

            let unique: HashSet<&String> = tags.as_slice().iter().collect();
            assert_eq!(unique.len(), tags.as_slice().len(), "seed {seed} step {step}");

            let ticks: Vec<usize> = tags.as_slice().iter().map(|tag| added_at[tag]).collect();
            assert!(
                ticks.windows(2).all(|pair| pair[0] < pair[1]),
                "seed {seed} step {step}: {:?}",
                tags.as_slice()
            );
            assert_eq!(tags.as_slice().len(), added_at.len());
        }
    }
}

#[test]
fn test_entry_buffer_clears_only_on_success() {
    let mut tags = IngredientTags::new();
    tags.set_entry("garlic");
    assert!(tags.add_from_entry());
    assert_eq!(tags.entry(), "");

    tags.set_entry("garlic");
    assert!(!tags.add_from_entry());
    assert_eq!(tags.entry(), "garlic");
}

#[test]
fn test_chips_render_in_order() {
    let mut tags = IngredientTags::new();
    tags.add("leek");
    tags.add("potato");
    let html = render_tags(tags.as_slice());
    assert!(html.find("leek").unwrap() < html.find("potato").unwrap());
}

#[test]
fn test_budget_follows_entries_and_age_group() {
    let mut tracker = CalorieTracker::new(AgeGroup::Younger);
    tracker.record_entry("Pancakes", 450.0, "");
    tracker.record_entry("Pasta", 900.5, "large bowl");

    let stats = tracker.stats();
    assert!((stats.total - 1350.5).abs() < 1e-9);
    assert!((stats.remaining - 449.5).abs() < 1e-9);

    tracker.set_age_group(AgeGroup::Older);
    let stats = tracker.stats();
    assert!((stats.target - 1600.0).abs() < f64::EPSILON);
    assert!((stats.remaining - 249.5).abs() < 1e-9);
    assert_eq!(tracker.entries().len(), 2);

    let history = render_history(tracker.entries());
    assert!(history.contains("900.5 kcal"));
    assert!(history.contains("AI estimate"));
    assert!(render_stats(&stats).contains("249.5"));
}
