//! HTTP recipe generator
//!
//! Posts the generation request as JSON to a remote endpoint (typically an
//! edge function fronting a generative model) and parses `{ "recipe": ... }`
//! or `{ "error": ... }` from the reply.
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{GeneratedRecipe, GenerationRequest},
    services::providers::{parse_generation_body, RecipeGenerator},
};

#[derive(Clone)]
pub struct HttpRecipeGenerator {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl HttpRecipeGenerator {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
            api_key,
        })
    }
}

#[async_trait::async_trait]
impl RecipeGenerator for HttpRecipeGenerator {
    #[instrument(skip_all, fields(ingredients = request.ingredients.len()))]
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GeneratedRecipe> {
        let mut builder = self.http_client.post(&self.api_url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recipe generator returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw generator response");

        let recipe = parse_generation_body(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to read generator response"
            );
            e
        })?;

        tracing::info!(title = %recipe.title, "Recipe generated");

        Ok(recipe)
    }
}
