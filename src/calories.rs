// ABOUTME: Calorie tracker accumulating per-photo estimates against a daily target
// ABOUTME: Derived stats are recomputed on every entry and every age-group change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use cooksense_core::models::{AgeGroup, ConsumedFoodEntry};
use tracing::debug;

/// Derived display values for the intake panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieStats {
    /// Daily intake target for the selected age group
    pub target: f64,
    /// Sum of all recorded entries
    pub total: f64,
    /// `target - total`; negative means over budget
    pub remaining: f64,
}

impl CalorieStats {
    /// Whether the remaining budget is negative
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Session-scoped list of analysed meals
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieTracker {
    entries: Vec<ConsumedFoodEntry>,
    age_group: AgeGroup,
    stats: CalorieStats,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self::new(AgeGroup::default())
    }
}

impl CalorieTracker {
    /// Empty tracker for the given age group
    #[must_use]
    pub fn new(age_group: AgeGroup) -> Self {
        let mut tracker = Self {
            entries: Vec::new(),
            age_group,
            stats: CalorieStats {
                target: 0.0,
                total: 0.0,
                remaining: 0.0,
            },
        };
        tracker.recompute();
        tracker
    }

    /// Append an entry and recompute the stats
    pub fn record_entry(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        reason: impl Into<String>,
    ) -> &ConsumedFoodEntry {
        self.push(ConsumedFoodEntry {
            name: name.into(),
            calories,
            reason: reason.into(),
        })
    }

    /// Append an already-built entry and recompute the stats
    pub fn push(&mut self, entry: ConsumedFoodEntry) -> &ConsumedFoodEntry {
        debug!(food = %entry.name, calories = entry.calories, "meal recorded");
        self.entries.push(entry);
        self.recompute();
        // Just pushed, so the list is non-empty
        &self.entries[self.entries.len() - 1]
    }

    /// Change the age group; target and remaining follow immediately
    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.age_group = age_group;
        self.recompute();
    }

    /// Selected age group
    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    /// Current derived values
    #[must_use]
    pub const fn stats(&self) -> CalorieStats {
        self.stats
    }

    /// Recorded entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[ConsumedFoodEntry] {
        &self.entries
    }

    fn recompute(&mut self) {
        let target = self.age_group.daily_intake_kcal();
        let total: f64 = self.entries.iter().map(|entry| entry.calories).sum();
        self.stats = CalorieStats {
            target,
            total,
            remaining: target - total,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_change_recomputes_without_new_entry() {
        let mut tracker = CalorieTracker::new(AgeGroup::Adult);
        tracker.record_entry("rice bowl", 500.0, "");
        assert!((tracker.stats().remaining - 1700.0).abs() < f64::EPSILON);

        tracker.set_age_group(AgeGroup::Older);
        assert!((tracker.stats().target - 1600.0).abs() < f64::EPSILON);
        assert!((tracker.stats().remaining - 1100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_over_budget_flag() {
        let mut tracker = CalorieTracker::new(AgeGroup::Younger);
        tracker.record_entry("pizza", 1200.0, "large");
        tracker.record_entry("cake", 700.0, "slice");
        let stats = tracker.stats();
        assert!((stats.total - 1900.0).abs() < f64::EPSILON);
        assert!(stats.is_over_budget());
        assert_eq!(tracker.entries().len(), 2);
    }
}
