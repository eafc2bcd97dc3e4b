use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Recipe acquisition
        .route("/recipes/generate", post(handlers::generate_recipes))
        .route("/recipes/featured", get(handlers::featured_recipes))
        // Display filters
        .route("/recipes/filter", post(handlers::filter_recipes))
        .route("/filters/options", get(handlers::filter_options))
        // Saved recipes
        .route("/saved", get(handlers::list_saved))
        .route("/saved", post(handlers::save_recipe))
        .route("/saved/toggle", post(handlers::toggle_saved))
        .route("/saved/:id", delete(handlers::remove_saved))
}
