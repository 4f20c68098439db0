// ABOUTME: Mock endpoint client with canned responses and per-endpoint failure switches
// ABOUTME: Records every generation request so tests can inspect the assembled payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ImageUpload, RecipeApi};
use async_trait::async_trait;
use cooksense_core::models::{CalorieEstimate, GenerateRequest, Recipe, RecipeVersion};
use cooksense_core::{AppError, AppResult};
use std::sync::{Mutex, MutexGuard, PoisonError};

const SERVICE: &str = "Mock CookSense API";

#[derive(Debug, Default)]
struct MockState {
    scan_result: Vec<String>,
    estimate: CalorieEstimate,
    recipes: Vec<Recipe>,
    fail_scan: bool,
    fail_calories: bool,
    fail_generate: bool,
    requests: Vec<GenerateRequest>,
    uploads: usize,
}

/// Mock client for tests (no network calls)
#[derive(Debug, Default)]
pub struct MockRecipeApi {
    state: Mutex<MockState>,
}

impl MockRecipeApi {
    /// Mock with the stock carrot/chicken data
    #[must_use]
    pub fn new() -> Self {
        let mock = Self::default();
        {
            let mut state = mock.lock();
            state.scan_result = vec!["carrot".to_owned(), "chicken".to_owned()];
            state.estimate = CalorieEstimate {
                food_name: Some("Fried rice".to_owned()),
                estimated_calories: Some(600.0),
                reasoning: Some("One plate with oil and egg".to_owned()),
            };
            state.recipes = vec![Self::stir_fry()];
        }
        mock
    }

    /// The stock generation result
    #[must_use]
    pub fn stir_fry() -> Recipe {
        Recipe {
            name: Some("Carrot Chicken Stir-fry".to_owned()),
            time: Some("20 min".to_owned()),
            difficulty: Some("easy".to_owned()),
            portions: Some("2".to_owned()),
            standard: Some(RecipeVersion {
                calories: Some(350.0),
                ingredients: vec!["2 carrots".to_owned(), "200g chicken breast".to_owned()],
                steps: vec!["Slice everything".to_owned(), "Stir-fry on high heat".to_owned()],
                ..RecipeVersion::default()
            }),
            ..Recipe::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the ingredients returned by `scan_fridge`
    #[must_use]
    pub fn with_scan_result(self, ingredients: Vec<String>) -> Self {
        self.lock().scan_result = ingredients;
        self
    }

    /// Replace the estimate returned by `analyze_calories`
    #[must_use]
    pub fn with_estimate(self, estimate: CalorieEstimate) -> Self {
        self.lock().estimate = estimate;
        self
    }

    /// Replace the recipes returned by `generate`
    pub fn set_recipes(&self, recipes: Vec<Recipe>) {
        self.lock().recipes = recipes;
    }

    /// Make `scan_fridge` fail
    pub fn set_fail_scan(&self, fail: bool) {
        self.lock().fail_scan = fail;
    }

    /// Make `analyze_calories` fail
    pub fn set_fail_calories(&self, fail: bool) {
        self.lock().fail_calories = fail;
    }

    /// Make `generate` fail
    pub fn set_fail_generate(&self, fail: bool) {
        self.lock().fail_generate = fail;
    }

    /// Generation requests received so far
    #[must_use]
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.lock().requests.clone()
    }

    /// Image uploads received so far, across both image endpoints
    #[must_use]
    pub fn upload_count(&self) -> usize {
        self.lock().uploads
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn scan_fridge(&self, _image: &ImageUpload) -> AppResult<Vec<String>> {
        let mut state = self.lock();
        state.uploads += 1;
        if state.fail_scan {
            return Err(AppError::external_unavailable(SERVICE, "scan-fridge unreachable"));
        }
        Ok(state.scan_result.clone())
    }

    async fn analyze_calories(&self, _image: &ImageUpload) -> AppResult<CalorieEstimate> {
        let mut state = self.lock();
        state.uploads += 1;
        if state.fail_calories {
            return Err(AppError::external_service(SERVICE, "analyze-calories HTTP 500"));
        }
        Ok(state.estimate.clone())
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<Vec<Recipe>> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        if state.fail_generate {
            return Err(AppError::external_service(SERVICE, "generate HTTP 502"));
        }
        Ok(state.recipes.clone())
    }
}
