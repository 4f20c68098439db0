// ABOUTME: Calorie panel renderer: target, consumed total, remaining budget and meal history
// ABOUTME: A negative remaining budget gets the over-budget style and suffix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_kcal, text};
use crate::calories::CalorieStats;
use cooksense_core::constants::placeholders;
use cooksense_core::models::ConsumedFoodEntry;

/// Remaining-budget text, e.g. `1600` or `-200 (over budget!)`
#[must_use]
pub fn remaining_text(stats: &CalorieStats) -> String {
    let mut remaining = format_kcal(stats.remaining);
    if stats.is_over_budget() {
        remaining.push_str(placeholders::OVER_BUDGET_SUFFIX);
    }
    remaining
}

/// Stats block
#[must_use]
pub fn render_stats(stats: &CalorieStats) -> String {
    let class = if stats.is_over_budget() {
        "over-budget"
    } else {
        "within-budget"
    };
    format!(
        concat!(
            r#"<div class="calorie-stats">"#,
            r#"<span id="targetCal">{target}</span>"#,
            r#"<span id="totalConsumed">{total}</span>"#,
            r#"<span id="remainingCal" class="{class}">{remaining}</span>"#,
            "</div>"
        ),
        target = format_kcal(stats.target),
        total = format_kcal(stats.total),
        class = class,
        remaining = text(&remaining_text(stats)),
    )
}

/// One receipt-style history line
#[must_use]
pub fn render_entry(entry: &ConsumedFoodEntry) -> String {
    let reason = if entry.reason.trim().is_empty() {
        placeholders::DEFAULT_REASON
    } else {
        entry.reason.as_str()
    };
    format!(
        concat!(
            r#"<div class="food-item-entry">"#,
            r#"<div class="food-item-head"><span>{name}</span><span>{kcal} kcal</span></div>"#,
            r#"<div class="food-item-reason">{reason}</div>"#,
            "</div>"
        ),
        name = text(&entry.name),
        kcal = format_kcal(entry.calories),
        reason = text(reason),
    )
}

/// Full history, oldest first
#[must_use]
pub fn render_history(entries: &[ConsumedFoodEntry]) -> String {
    entries.iter().map(render_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_budget_suffix_and_class() {
        let stats = CalorieStats {
            target: 1600.0,
            total: 1800.0,
            remaining: -200.0,
        };
        assert_eq!(remaining_text(&stats), "-200 (over budget!)");
        assert!(render_stats(&stats).contains(r#"class="over-budget""#));
    }

    #[test]
    fn test_within_budget() {
        let stats = CalorieStats {
            target: 2200.0,
            total: 600.0,
            remaining: 1600.0,
        };
        let html = render_stats(&stats);
        assert!(html.contains(r#"<span id="remainingCal" class="within-budget">1600</span>"#));
    }

    #[test]
    fn test_entry_default_reason() {
        let entry = ConsumedFoodEntry {
            name: "Ramen".to_owned(),
            calories: 550.0,
            reason: String::new(),
        };
        let html = render_entry(&entry);
        assert!(html.contains("550 kcal"));
        assert!(html.contains(placeholders::DEFAULT_REASON));
    }
}
