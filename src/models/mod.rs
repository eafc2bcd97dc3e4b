use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

pub mod filters;
pub mod preferences;
pub mod saved;

pub use filters::{ActiveFilters, FilterOptions, FilterOutcome};
pub use preferences::AcquisitionPreferences;
pub use saved::{Owner, SavedRecipe, SavedRecipeSet};

/// Identifier for a recipe.
///
/// Regenerated every time a recipe is materialized from the catalog or from a
/// generator response, so it is only meaningful within one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    /// Creates a new random recipe ID
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl Default for NutritionalInfo {
    fn default() -> Self {
        Self {
            calories: 400,
            protein: "20g".to_string(),
            carbs: "40g".to_string(),
            fat: "15g".to_string(),
        }
    }
}

/// A recipe suggestion returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Free-text "quantity + name" strings, e.g. "400g spaghetti"
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub cuisine_type: String,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    pub nutritional_info: NutritionalInfo,
}

impl Recipe {
    /// Copies the recipe under a newly generated identifier
    pub fn reidentified(&self) -> Self {
        Self {
            id: RecipeId::fresh(),
            ..self.clone()
        }
    }

    pub fn has_any_dietary_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.dietary_info.contains(tag))
    }
}

// ============================================================================
// Recipe Generator Wire Types
// ============================================================================

pub const DEFAULT_COOKING_TIME: u32 = 30;
pub const DEFAULT_CUISINE: &str = "International";

/// Request body sent to the remote recipe generator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    /// Dietary tags
    pub preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl GenerationRequest {
    pub fn new(ingredients: &[String], prefs: &AcquisitionPreferences) -> Self {
        Self {
            ingredients: ingredients.to_vec(),
            preferences: prefs.dietary.clone(),
            cooking_time: prefs.cooking_time.clone(),
            difficulty: prefs.difficulty.clone(),
        }
    }
}

/// Response body from the remote recipe generator
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub recipe: Option<GeneratedRecipe>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw recipe as produced by the generator. Only the title, ingredients and
/// instructions are required; everything else falls back to defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_minutes")]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub dietary_info: Option<Vec<String>>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
}

impl GeneratedRecipe {
    /// A generated recipe is usable when it has a title and non-empty
    /// ingredient and instruction lists.
    pub fn is_usable(&self) -> bool {
        !self.title.trim().is_empty() && !self.ingredients.is_empty() && !self.instructions.is_empty()
    }
}

impl From<GeneratedRecipe> for Recipe {
    fn from(generated: GeneratedRecipe) -> Self {
        let difficulty = generated
            .difficulty
            .as_deref()
            .and_then(|label| label.parse().ok())
            .unwrap_or_default();

        let cuisine_type = generated
            .cuisine_type
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string());

        Recipe {
            id: RecipeId::fresh(),
            title: generated.title,
            ingredients: generated.ingredients,
            instructions: generated.instructions,
            cooking_time: generated
                .cooking_time
                .filter(|&t| t > 0)
                .unwrap_or(DEFAULT_COOKING_TIME),
            difficulty,
            cuisine_type,
            dietary_info: generated.dietary_info.unwrap_or_default(),
            nutritional_info: generated.nutritional_info.unwrap_or_default(),
        }
    }
}

/// Generators return cooking time either as a number or as a numeric string
fn deserialize_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Minutes>::deserialize(deserializer)? {
        Some(Minutes::Number(n)) => Some(n),
        Some(Minutes::Text(s)) => preferences::parse_minutes(&s),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_levels_are_ordered() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: RecipeId::fresh(),
            title: "Toast".to_string(),
            ingredients: vec!["2 slices bread".to_string()],
            instructions: vec!["Toast the bread".to_string()],
            cooking_time: 5,
            difficulty: Difficulty::Easy,
            cuisine_type: "American".to_string(),
            dietary_info: vec!["Vegetarian".to_string()],
            nutritional_info: NutritionalInfo::default(),
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["cookingTime"], 5);
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["cuisineType"], "American");
        assert_eq!(json["dietaryInfo"][0], "Vegetarian");
        assert_eq!(json["nutritionalInfo"]["calories"], 400);
    }

    #[test]
    fn test_reidentified_changes_only_id() {
        let recipe: Recipe = GeneratedRecipe {
            title: "Soup".to_string(),
            ingredients: vec!["water".to_string()],
            instructions: vec!["Boil".to_string()],
            cooking_time: None,
            difficulty: None,
            cuisine_type: None,
            dietary_info: None,
            nutritional_info: None,
        }
        .into();

        let copy = recipe.reidentified();
        assert_ne!(copy.id, recipe.id);
        assert_eq!(copy.title, recipe.title);
        assert_eq!(copy.ingredients, recipe.ingredients);
    }

    #[test]
    fn test_generated_recipe_defaults() {
        let json = r#"{
            "title": "Garlic Rice",
            "ingredients": ["1 cup rice", "2 cloves garlic"],
            "instructions": ["Cook rice", "Fry garlic", "Combine"]
        }"#;
        let generated: GeneratedRecipe = serde_json::from_str(json).unwrap();
        let recipe = Recipe::from(generated);

        assert_eq!(recipe.cooking_time, 30);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.cuisine_type, "International");
        assert!(recipe.dietary_info.is_empty());
        assert_eq!(recipe.nutritional_info, NutritionalInfo::default());
    }

    #[test]
    fn test_generated_recipe_keeps_supplied_fields() {
        let json = r#"{
            "title": "Pad See Ew",
            "ingredients": ["rice noodles"],
            "instructions": ["Stir fry"],
            "cookingTime": "25 minutes",
            "difficulty": "hard",
            "cuisineType": "Thai",
            "dietaryInfo": ["Dairy-Free"],
            "nutritionalInfo": {"calories": 610, "protein": "22g", "carbs": "80g", "fat": "19g"}
        }"#;
        let recipe: Recipe = serde_json::from_str::<GeneratedRecipe>(json).unwrap().into();

        assert_eq!(recipe.cooking_time, 25);
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.cuisine_type, "Thai");
        assert_eq!(recipe.dietary_info, vec!["Dairy-Free".to_string()]);
        assert_eq!(recipe.nutritional_info.calories, 610);
    }

    #[test]
    fn test_unknown_generated_difficulty_defaults_to_medium() {
        let json = r#"{"title": "X", "ingredients": ["a"], "instructions": ["b"], "difficulty": "Expert", "cookingTime": 0}"#;
        let recipe: Recipe = serde_json::from_str::<GeneratedRecipe>(json).unwrap().into();
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.cooking_time, 30);
    }

    #[test]
    fn test_generated_recipe_usability() {
        let mut generated = GeneratedRecipe {
            title: "Salad".to_string(),
            ingredients: vec!["lettuce".to_string()],
            instructions: vec!["Toss".to_string()],
            cooking_time: None,
            difficulty: None,
            cuisine_type: None,
            dietary_info: None,
            nutritional_info: None,
        };
        assert!(generated.is_usable());

        generated.instructions.clear();
        assert!(!generated.is_usable());
    }

    #[test]
    fn test_generation_request_omits_absent_fields() {
        let prefs = AcquisitionPreferences {
            dietary: vec!["Vegan".to_string()],
            ..Default::default()
        };
        let request = GenerationRequest::new(&["tofu".to_string()], &prefs);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["ingredients"][0], "tofu");
        assert_eq!(json["preferences"][0], "Vegan");
        assert!(json.get("cookingTime").is_none());
        assert!(json.get("difficulty").is_none());
    }
}
