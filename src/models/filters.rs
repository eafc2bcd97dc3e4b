use serde::{Deserialize, Serialize};

use super::{Difficulty, Recipe};

/// Display filters chosen by the user for the recipe set currently held.
///
/// Values are replaced wholesale on every interaction; helpers return a new
/// value instead of mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Minutes, inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cooking_time: Option<u32>,
    /// Exact cuisine label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// A recipe passes when it carries at least one of these tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary: Vec<String>,
    /// Display-only facet. Recipes have no serving size, so this never
    /// restricts results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
}

impl ActiveFilters {
    /// Whether any facet is set
    pub fn is_active(&self) -> bool {
        self.difficulty.is_some()
            || self.max_cooking_time.is_some()
            || self.cuisine.is_some()
            || !self.dietary.is_empty()
            || self.serving_size.is_some()
    }

    /// Returns filters with `tag` added to, or removed from, the dietary list
    pub fn toggle_dietary(&self, tag: &str) -> Self {
        let dietary = if self.dietary.iter().any(|d| d == tag) {
            self.dietary.iter().filter(|d| *d != tag).cloned().collect()
        } else {
            let mut next = self.dietary.clone();
            next.push(tag.to_string());
            next
        };

        Self {
            dietary,
            ..self.clone()
        }
    }
}

/// Result of applying active filters to a recipe set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
    pub recipes: Vec<Recipe>,
    /// Size of the unfiltered pool
    pub total: usize,
    /// Whether any filter was active
    pub filtered: bool,
    /// Pool was non-empty but nothing survived the filters; clients offer a
    /// way to clear them
    pub no_matches: bool,
}

/// Facet values offered to clients for building filter controls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub difficulties: Vec<Difficulty>,
    pub cuisines: Vec<&'static str>,
    pub dietary: Vec<&'static str>,
    pub max_cooking_times: Vec<u32>,
    pub serving_sizes: Vec<&'static str>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            difficulties: vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
            cuisines: vec![
                "Mediterranean",
                "Italian",
                "Asian",
                "Thai",
                "Mexican",
                "Indian",
                "American",
                "French",
            ],
            dietary: vec![
                "Vegetarian",
                "Vegan",
                "Gluten-Free",
                "Dairy-Free",
                "Keto",
                "Low-Carb",
                "High-Protein",
                "Mediterranean",
            ],
            max_cooking_times: vec![15, 30, 60],
            serving_sizes: vec!["1-2 people", "3-4 people", "5-6 people", "7+ people"],
        }
    }
}
