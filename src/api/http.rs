// ABOUTME: reqwest client for the scan-fridge, analyze-calories and generate endpoints
// ABOUTME: Non-2xx statuses and undecodable bodies are reported as external service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ImageUpload, RecipeApi};
use crate::config::ClientConfig;
use async_trait::async_trait;
use cooksense_core::constants::endpoints;
use cooksense_core::models::{CalorieEstimate, GenerateRequest, Recipe, ScanResponse};
use cooksense_core::{AppError, AppResult};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

const SERVICE: &str = "CookSense API";

/// HTTP client bound to one endpoint origin
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    http_client: reqwest::Client,
    scan_url: Url,
    calories_url: Url,
    generate_url: Url,
}

impl HttpRecipeApi {
    /// Build a client for the configured origin
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an endpoint URL cannot be built, and
    /// `InternalError` if the TLS backend fails to initialise
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            scan_url: config.endpoint(endpoints::SCAN_FRIDGE)?,
            calories_url: config.endpoint(endpoints::ANALYZE_CALORIES)?,
            generate_url: config.endpoint(endpoints::GENERATE)?,
        })
    }

    fn image_form(image: &ImageUpload) -> AppResult<Form> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)
            .map_err(|e| AppError::invalid_input(format!("invalid image type: {e}")))?;
        Ok(Form::new().part(endpoints::IMAGE_FIELD, part))
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        endpoint: &str,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, %status, "endpoint returned an error status");
            return Err(AppError::external_service(
                SERVICE,
                format!("{endpoint} HTTP {status}: {body}"),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("{endpoint} JSON parse error: {e}"))
        })
    }

    async fn post_image<T: DeserializeOwned>(&self, url: &Url, image: &ImageUpload) -> AppResult<T> {
        debug!(endpoint = url.path(), bytes = image.bytes.len(), "uploading image");
        let response = self
            .http_client
            .post(url.clone())
            .multipart(Self::image_form(image)?)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SERVICE, e.to_string()))?;
        Self::read_json(response, url.path()).await
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn scan_fridge(&self, image: &ImageUpload) -> AppResult<Vec<String>> {
        let response: ScanResponse = self.post_image(&self.scan_url, image).await?;
        Ok(response.ingredients)
    }

    async fn analyze_calories(&self, image: &ImageUpload) -> AppResult<CalorieEstimate> {
        self.post_image(&self.calories_url, image).await
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<Vec<Recipe>> {
        debug!(
            ingredients = request.ingredients.len(),
            age_group = %request.age_group,
            "requesting recipes"
        );
        let response = self
            .http_client
            .post(self.generate_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(SERVICE, e.to_string()))?;

        let body: Value = Self::read_json(response, self.generate_url.path()).await?;
        decode_recipes(body)
    }
}

/// Decode the generation body: a JSON array of recipe records
///
/// Records that are not objects are dropped; partial records decode with
/// their missing fields absent.
///
/// # Errors
///
/// Returns `ExternalServiceError` if the body is not an array
pub fn decode_recipes(body: Value) -> AppResult<Vec<Recipe>> {
    let Value::Array(records) = body else {
        return Err(AppError::external_service(
            SERVICE,
            format!("{} returned a non-list body", endpoints::GENERATE),
        ));
    };
    let total = records.len();
    let recipes: Vec<Recipe> = records
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();
    if recipes.len() < total {
        warn!(
            dropped = total - recipes.len(),
            "skipped recipe records that were not objects"
        );
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_recipes_tolerates_partial_records() {
        let recipes = decode_recipes(json!([
            {"name": "Soup"},
            "garbage",
            {"standard": {"calories": 120}}
        ]))
        .unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].display_name(), "Soup");
    }

    #[test]
    fn test_decode_recipes_rejects_objects() {
        let err = decode_recipes(json!({"error": "quota"})).unwrap_err();
        assert!(err.code.is_external());
    }
}
