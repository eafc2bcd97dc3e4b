//! Remote recipe generator abstraction
//!
//! The generator is an external collaborator: one request in, one structured
//! recipe out, or an error. Any error is treated by the acquisition service as
//! a reason to fall back to the catalog, never as a failure of the request.
use crate::{
    error::{AppError, AppResult},
    models::{GeneratedRecipe, GenerationRequest, GenerationResponse},
};

pub mod http;

pub use http::HttpRecipeGenerator;

/// Trait for remote recipe generators
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generates a single recipe for the given ingredients and preferences
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GeneratedRecipe>;
}

/// Generator used when no remote endpoint is configured. Always fails, so
/// every acquisition is served from the catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGenerator;

#[async_trait::async_trait]
impl RecipeGenerator for DisabledGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> AppResult<GeneratedRecipe> {
        Err(AppError::ExternalApi(
            "Recipe generator is not configured".to_string(),
        ))
    }
}

/// Parses a generator response body.
///
/// Markdown code fences around the JSON are tolerated. A body that does not
/// parse, reports an error, or carries no recipe is a generation failure.
pub fn parse_generation_body(body: &str) -> AppResult<GeneratedRecipe> {
    let cleaned = strip_code_fences(body);

    let response: GenerationResponse = serde_json::from_str(cleaned).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse generator response: {}", e))
    })?;

    if let Some(error) = response.error {
        return Err(AppError::ExternalApi(format!(
            "Generator reported an error: {}",
            error
        )));
    }

    response
        .recipe
        .ok_or_else(|| AppError::ExternalApi("Generator response missing recipe".to_string()))
}

/// Removes a leading ```` ```json ```` / ```` ``` ```` fence and a trailing
/// ```` ``` ```` fence
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open);

    without_close.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"recipe": {"title": "Shakshuka", "ingredients": ["4 eggs", "1 can tomatoes"], "instructions": ["Simmer tomatoes", "Poach eggs"]}}"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  {} "), "{}");
    }

    #[test]
    fn test_parse_plain_body() {
        let recipe = parse_generation_body(BODY).unwrap();
        assert_eq!(recipe.title, "Shakshuka");
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_parse_fenced_body() {
        let fenced = format!("```json\n{}\n```", BODY);
        let recipe = parse_generation_body(&fenced).unwrap();
        assert_eq!(recipe.title, "Shakshuka");
    }

    #[test]
    fn test_parse_error_body() {
        let result = parse_generation_body(r#"{"error": "Gemini API error: 429"}"#);
        assert!(matches!(result, Err(AppError::ExternalApi(msg)) if msg.contains("429")));
    }

    #[test]
    fn test_parse_missing_recipe() {
        let result = parse_generation_body("{}");
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_generation_body("Here is your recipe: pasta!");
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        let request = GenerationRequest {
            ingredients: vec!["rice".to_string()],
            preferences: vec![],
            cooking_time: None,
            difficulty: None,
        };
        assert!(DisabledGenerator.generate(&request).await.is_err());
    }
}
