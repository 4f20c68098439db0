// ABOUTME: Endpoint client seam for the three CookSense AI endpoints
// ABOUTME: Defines RecipeApi, the ImageUpload payload, and re-exports the HTTP and mock clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Endpoint client
//!
//! The session only talks to the AI endpoints through [`RecipeApi`], so the
//! same flows run against the real HTTP origin or an in-process mock.

use async_trait::async_trait;
use cooksense_core::models::{CalorieEstimate, GenerateRequest, Recipe};
use cooksense_core::{AppError, AppResult};
use std::path::Path;

/// reqwest client for the same-origin endpoints
pub mod http;

/// Canned responses and failure switches for tests
pub mod mock;

pub use http::HttpRecipeApi;
pub use mock::MockRecipeApi;

/// A photo picked by the user, sent as the `image` multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name reported to the server
    pub file_name: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
    /// MIME type of the bytes
    pub mime: String,
}

impl ImageUpload {
    /// Wrap in-memory bytes
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_owned();
        Self {
            file_name,
            bytes,
            mime,
        }
    }

    /// Read a photo from disk
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::invalid_input(format!("cannot read image {}: {e}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    /// Whether there is nothing to upload
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// The three AI endpoints
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `POST /scan-fridge`: recognise ingredients in a fridge photo
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` on network, HTTP or decode failure
    async fn scan_fridge(&self, image: &ImageUpload) -> AppResult<Vec<String>>;

    /// `POST /analyze-calories`: estimate the calories of a meal photo
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` on network, HTTP or decode failure
    async fn analyze_calories(&self, image: &ImageUpload) -> AppResult<CalorieEstimate>;

    /// `POST /generate`: recipes for the given ingredients and preferences
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` on network, HTTP or decode failure
    async fn generate(&self, request: &GenerateRequest) -> AppResult<Vec<Recipe>>;
}
