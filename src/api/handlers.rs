use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        AcquisitionPreferences, ActiveFilters, FilterOptions, FilterOutcome, Owner, Recipe,
        RecipeId,
    },
    services::active_filters,
};

use super::AppState;

/// Header set by the upstream auth layer for signed-in users
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header identifying an anonymous browser session
pub const SESSION_ID_HEADER: &str = "x-session-id";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct GenerateRecipesRequest {
    pub ingredients: Vec<String>,
    #[serde(flatten)]
    pub preferences: AcquisitionPreferences,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
    pub count: usize,
}

impl From<Vec<Recipe>> for RecipesResponse {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self {
            count: recipes.len(),
            recipes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FilterRecipesRequest {
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub filters: ActiveFilters,
}

#[derive(Debug, Deserialize)]
pub struct SaveRecipeRequest {
    pub recipe: Recipe,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSavedResponse {
    pub recipe_id: RecipeId,
    pub saved: bool,
}

/// Resolves whose saved recipes a request refers to
pub fn owner_from_headers(headers: &HeaderMap) -> AppResult<Owner> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(user_id) = header(USER_ID_HEADER) {
        let id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::InvalidInput(format!("Invalid {} header", USER_ID_HEADER)))?;
        return Ok(Owner::User(id));
    }

    if let Some(session_id) = header(SESSION_ID_HEADER) {
        return Ok(Owner::Session(session_id.to_string()));
    }

    Err(AppError::InvalidInput(format!(
        "Either {} or {} header is required",
        USER_ID_HEADER, SESSION_ID_HEADER
    )))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Acquire recipe suggestions for a list of ingredients
pub async fn generate_recipes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<GenerateRecipesRequest>,
) -> Json<RecipesResponse> {
    tracing::info!(
        request_id = %request_id,
        ingredients = request.ingredients.len(),
        "Processing recipe generation request"
    );

    let recipes = state
        .acquisition
        .acquire(&request.ingredients, &request.preferences)
        .await;

    tracing::info!(request_id = %request_id, count = recipes.len(), "Recipes acquired");

    Json(recipes.into())
}

/// Acquire the featured recipe set
pub async fn featured_recipes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<RecipesResponse> {
    let recipes = state.acquisition.featured().await;
    tracing::info!(request_id = %request_id, count = recipes.len(), "Featured recipes acquired");
    Json(recipes.into())
}

/// Apply display filters to a recipe set held by the client
pub async fn filter_recipes(Json(request): Json<FilterRecipesRequest>) -> Json<FilterOutcome> {
    Json(active_filters::apply_with_outcome(
        &request.recipes,
        &request.filters,
    ))
}

/// Facet values for building filter controls
pub async fn filter_options() -> Json<FilterOptions> {
    Json(FilterOptions::default())
}

/// List saved recipes, newest first
pub async fn list_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<RecipesResponse>> {
    let owner = owner_from_headers(&headers)?;
    let recipes = state.saved.list(&owner).await?;
    Ok(Json(recipes.into()))
}

/// Save a recipe
pub async fn save_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SaveRecipeRequest>,
) -> AppResult<StatusCode> {
    let owner = owner_from_headers(&headers)?;
    state.saved.save(&owner, &request.recipe).await?;
    Ok(StatusCode::CREATED)
}

/// Flip the saved state of a recipe
pub async fn toggle_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SaveRecipeRequest>,
) -> AppResult<Json<ToggleSavedResponse>> {
    let owner = owner_from_headers(&headers)?;
    let saved = state.saved.toggle(&owner, &request.recipe).await?;

    Ok(Json(ToggleSavedResponse {
        recipe_id: request.recipe.id,
        saved,
    }))
}

/// Remove a saved recipe
pub async fn remove_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let owner = owner_from_headers(&headers)?;
    state.saved.remove(&owner, &RecipeId(recipe_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
