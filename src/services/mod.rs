pub mod acquisition;
pub mod active_filters;
pub mod cascade;
pub mod catalog;
pub mod matcher;
pub mod providers;
pub mod saved;
pub mod shuffle;

pub use acquisition::RecipeAcquisitionService;
pub use catalog::Catalog;
pub use saved::{InMemorySavedRecipeStore, SavedRecipeService, SavedRecipeStore};
