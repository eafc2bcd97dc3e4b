use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{Owner, Recipe, RecipeId, SavedRecipeSet},
};

/// Persistence for saved recipes
///
/// Saving an already saved recipe and removing an absent one are both no-ops.
/// Failures are returned to the caller unchanged; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SavedRecipeStore: Send + Sync {
    async fn save(&self, owner: &Owner, recipe: &Recipe) -> AppResult<()>;

    async fn remove(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<()>;

    async fn contains(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<bool>;

    /// Saved recipes, most recently saved first
    async fn list_saved(&self, owner: &Owner) -> AppResult<Vec<Recipe>>;
}

/// Process-local store, used when no database or cache is configured
#[derive(Default, Clone)]
pub struct InMemorySavedRecipeStore {
    sets: Arc<RwLock<HashMap<Owner, SavedRecipeSet>>>,
}

impl InMemorySavedRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SavedRecipeStore for InMemorySavedRecipeStore {
    async fn save(&self, owner: &Owner, recipe: &Recipe) -> AppResult<()> {
        let mut sets = self.sets.write().await;
        sets.entry(owner.clone()).or_default().insert(recipe.clone());
        Ok(())
    }

    async fn remove(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<()> {
        let mut sets = self.sets.write().await;
        if let Some(set) = sets.get_mut(owner) {
            set.remove(recipe_id);
        }
        Ok(())
    }

    async fn contains(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<bool> {
        let sets = self.sets.read().await;
        Ok(sets.get(owner).is_some_and(|set| set.contains(recipe_id)))
    }

    async fn list_saved(&self, owner: &Owner) -> AppResult<Vec<Recipe>> {
        let sets = self.sets.read().await;
        Ok(sets
            .get(owner)
            .map(SavedRecipeSet::newest_first)
            .unwrap_or_default())
    }
}

/// Routes saved-recipe operations to the store for the owner's kind
#[derive(Clone)]
pub struct SavedRecipeService {
    users: Arc<dyn SavedRecipeStore>,
    sessions: Arc<dyn SavedRecipeStore>,
}

impl SavedRecipeService {
    pub fn new(users: Arc<dyn SavedRecipeStore>, sessions: Arc<dyn SavedRecipeStore>) -> Self {
        Self { users, sessions }
    }

    /// Both owner kinds backed by process memory
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySavedRecipeStore::new()),
            Arc::new(InMemorySavedRecipeStore::new()),
        )
    }

    fn store_for(&self, owner: &Owner) -> &Arc<dyn SavedRecipeStore> {
        match owner {
            Owner::User(_) => &self.users,
            Owner::Session(_) => &self.sessions,
        }
    }

    pub async fn save(&self, owner: &Owner, recipe: &Recipe) -> AppResult<()> {
        self.store_for(owner).save(owner, recipe).await?;
        tracing::info!(owner = %owner, recipe_id = %recipe.id, "Recipe saved");
        Ok(())
    }

    pub async fn remove(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<()> {
        self.store_for(owner).remove(owner, recipe_id).await?;
        tracing::info!(owner = %owner, recipe_id = %recipe_id, "Recipe removed");
        Ok(())
    }

    pub async fn list(&self, owner: &Owner) -> AppResult<Vec<Recipe>> {
        self.store_for(owner).list_saved(owner).await
    }

    /// Flips saved membership for `recipe`, returning whether it is now saved
    pub async fn toggle(&self, owner: &Owner, recipe: &Recipe) -> AppResult<bool> {
        let currently_saved = self.store_for(owner).contains(owner, &recipe.id).await?;

        if currently_saved {
            self.remove(owner, &recipe.id).await?;
        } else {
            self.save(owner, recipe).await?;
        }

        Ok(!currently_saved)
    }
}
