use std::sync::Arc;

use crate::services::{RecipeAcquisitionService, SavedRecipeService};

/// Shared application state
///
/// Holds only service handles. Acquired recipe sets and active filters are
/// owned by the client and passed in with each request.
#[derive(Clone)]
pub struct AppState {
    pub acquisition: Arc<RecipeAcquisitionService>,
    pub saved: SavedRecipeService,
}

impl AppState {
    pub fn new(acquisition: RecipeAcquisitionService, saved: SavedRecipeService) -> Self {
        Self {
            acquisition: Arc::new(acquisition),
            saved,
        }
    }
}
