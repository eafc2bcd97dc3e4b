use redis::{aio::ConnectionManager, AsyncCommands, Client};
use std::fmt::Display;

use crate::{
    error::{AppError, AppResult},
    models::{Owner, Recipe, RecipeId, SavedRecipe},
    services::saved::SavedRecipeStore,
};

const SESSION_TTL: i64 = 2_592_000; // 30 days

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    SavedRecipes(String),
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::SavedRecipes(session) => write!(f, "saved_recipes:{}", session),
        }
    }
}

/// Creates a Redis client
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Saved recipes of anonymous sessions.
///
/// Each session is one Redis hash keyed by recipe ID, holding the full recipe
/// so entries survive identifier regeneration. Writes to different recipes
/// never touch each other's fields; writes to the same recipe are
/// last-write-wins.
#[derive(Clone)]
pub struct RedisSavedRecipeStore {
    conn: ConnectionManager,
}

impl RedisSavedRecipeStore {
    pub async fn new(client: Client) -> AppResult<Self> {
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn })
    }

    fn key(owner: &Owner) -> AppResult<CacheKey> {
        match owner {
            Owner::Session(session) => Ok(CacheKey::SavedRecipes(session.clone())),
            Owner::User(_) => Err(AppError::InvalidInput(
                "Signed-in users cannot use the session recipe store".to_string(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl SavedRecipeStore for RedisSavedRecipeStore {
    async fn save(&self, owner: &Owner, recipe: &Recipe) -> AppResult<()> {
        let key = Self::key(owner)?.to_string();
        let entry = serde_json::to_string(&SavedRecipe {
            recipe: recipe.clone(),
            saved_at: chrono::Utc::now(),
        })?;

        let mut conn = self.conn.clone();
        let _: bool = conn.hset_nx(&key, recipe.id.to_string(), entry).await?;
        let _: bool = conn.expire(&key, SESSION_TTL).await?;

        Ok(())
    }

    async fn remove(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<()> {
        let key = Self::key(owner)?.to_string();

        let mut conn = self.conn.clone();
        let _: i64 = conn.hdel(&key, recipe_id.to_string()).await?;

        Ok(())
    }

    async fn contains(&self, owner: &Owner, recipe_id: &RecipeId) -> AppResult<bool> {
        let key = Self::key(owner)?.to_string();

        let mut conn = self.conn.clone();
        let exists: bool = conn.hexists(&key, recipe_id.to_string()).await?;

        Ok(exists)
    }

    async fn list_saved(&self, owner: &Owner) -> AppResult<Vec<Recipe>> {
        let key = Self::key(owner)?.to_string();

        let mut conn = self.conn.clone();
        let values: Vec<String> = conn.hvals(&key).await?;

        let mut entries = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_str::<SavedRecipe>(&value) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::error!(error = %e, key = %key, "Skipping unreadable saved recipe");
                }
            }
        }

        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(entries.into_iter().map(|entry| entry.recipe).collect())
    }
}
