use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

use super::{Recipe, RecipeId};

/// Whose saved recipes are being read or changed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Signed-in user, identified by the upstream auth layer
    User(Uuid),
    /// Anonymous browser session
    Session(String),
}

impl Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::User(id) => write!(f, "user:{}", id),
            Owner::Session(id) => write!(f, "session:{}", id),
        }
    }
}

/// A recipe together with when it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub recipe: Recipe,
    pub saved_at: DateTime<Utc>,
}

/// Recipes an owner has marked as saved, keyed by recipe ID.
///
/// Full recipe content is kept, not just identifiers, because identifiers
/// are regenerated on every acquisition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipeSet {
    entries: Vec<SavedRecipe>,
}

impl SavedRecipeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipe. Saving an already saved recipe keeps the original entry.
    pub fn insert(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        self.entries.push(SavedRecipe {
            recipe,
            saved_at: Utc::now(),
        });
        true
    }

    /// Removes a recipe. Removing an absent recipe is a no-op.
    pub fn remove(&mut self, id: &RecipeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.recipe.id != *id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.entries.iter().any(|entry| entry.recipe.id == *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved recipes, most recently saved first
    pub fn newest_first(&self) -> Vec<Recipe> {
        let mut entries: Vec<&SavedRecipe> = self.entries.iter().rev().collect();
        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        entries.into_iter().map(|entry| entry.recipe.clone()).collect()
    }
}
