// ABOUTME: Application constants for storage keys, endpoints, intake targets and UI strings
// ABOUTME: Central place for every literal shared between the session, renderer and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Durable storage keys
pub mod storage {
    /// Key holding the JSON-serialized favorites list
    pub const FAVORITES_KEY: &str = "cooksense_saved";

    /// Key where an unreadable favorites blob is preserved before reset
    pub const FAVORITES_BACKUP_KEY: &str = "cooksense_saved.corrupt";
}

/// Same-origin endpoint paths
pub mod endpoints {
    /// Fridge photo to ingredient names
    pub const SCAN_FRIDGE: &str = "/scan-fridge";

    /// Food photo to calorie estimate
    pub const ANALYZE_CALORIES: &str = "/analyze-calories";

    /// Ingredient list and constraints to recipe list
    pub const GENERATE: &str = "/generate";

    /// Multipart field carrying the uploaded photo
    pub const IMAGE_FIELD: &str = "image";
}

/// Daily intake targets in kcal, keyed by age-group tier
pub mod intake {
    /// Growing children and teenagers
    pub const YOUNGER_KCAL: f64 = 1800.0;

    /// Adults
    pub const ADULT_KCAL: f64 = 2200.0;

    /// Seniors
    pub const OLDER_KCAL: f64 = 1600.0;
}

/// Default values substituted for missing fields
pub mod placeholders {
    /// Recipe without a name
    pub const UNTITLED_RECIPE: &str = "Untitled recipe";

    /// Missing time, difficulty or portions
    pub const MISSING_META: &str = "--";

    /// Single step shown when the healthy version is absent
    pub const HEALTHY_DEFAULT_STEP: &str = "Reduce oil and salt";

    /// Substitution strip with nothing to suggest
    pub const NO_SUBSTITUTIONS: &str = "No suggestions";

    /// Result area after a generation that returned nothing
    pub const NO_RECIPES: &str = "No recipes found. Try different ingredients.";

    /// Favorites panel with nothing saved
    pub const NO_FAVORITES: &str = "No saved recipes yet.";

    /// Calorie analysis without a food name
    pub const UNKNOWN_FOOD: &str = "Unknown food";

    /// Calorie analysis without a reason
    pub const DEFAULT_REASON: &str = "AI estimate";

    /// Suffix appended to a negative remaining budget
    pub const OVER_BUDGET_SUFFIX: &str = " (over budget!)";
}

/// User-facing alert strings; every failure path collapses into one of these
pub mod alerts {
    /// Generate pressed with no ingredients
    pub const NO_INGREDIENTS: &str = "Please add the ingredients in your fridge first!";

    /// Fridge scan request failed
    pub const SCAN_FAILED: &str = "Scan failed, please check your network connection.";

    /// Fridge scan returned no ingredients
    pub const NOTHING_RECOGNIZED: &str =
        "No ingredients recognized. Try again or add them manually.";

    /// Calorie analysis failed
    pub const CALORIES_FAILED: &str = "Unable to estimate calories, please try again later.";

    /// Recipe generation failed
    pub const GENERATE_FAILED: &str = "Error generating recipes.";

    /// Favorites could not be written to durable storage
    pub const SAVE_FAILED: &str = "Could not save your favorites, please try again.";
}

/// Control labels shown while idle and while a request is in flight
pub mod labels {
    /// Fridge camera button, idle
    pub const SCAN_IDLE: &str = "Scan fridge";
    /// Fridge camera button, busy
    pub const SCAN_BUSY: &str = "Recognizing...";
    /// Calorie camera button, idle
    pub const CALORIES_IDLE: &str = "Analyze meal";
    /// Calorie camera button, busy
    pub const CALORIES_BUSY: &str = "Analyzing...";
    /// Generate button, idle
    pub const GENERATE_IDLE: &str = "Generate recipes with AI";
    /// Generate button, busy
    pub const GENERATE_BUSY: &str = "Thinking...";
    /// Loader indicator
    pub const LOADER: &str = "Loading";
    /// Load more button
    pub const LOAD_MORE: &str = "Load more";
}
