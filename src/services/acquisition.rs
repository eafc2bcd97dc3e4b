use std::{sync::Arc, time::Duration};

use crate::{
    error::{AppError, AppResult},
    models::{AcquisitionPreferences, GenerationRequest, Recipe},
    services::{
        cascade,
        catalog::Catalog,
        matcher,
        providers::RecipeGenerator,
        shuffle::Shuffler,
    },
};

/// Upper bound on recipes returned by one acquisition
pub const TARGET_RECIPE_COUNT: usize = 8;

/// Recipes returned, in catalog order, when every selection step comes up empty
pub const FINAL_FALLBACK_COUNT: usize = 6;

/// Ingredients used for the featured ("browse all") recipe set
pub const FEATURED_INGREDIENTS: [&str; 3] = ["chicken", "pasta", "vegetables"];

/// Produces recipe suggestions for a list of ingredients.
///
/// Tries the remote generator first and pads its single recipe with catalog
/// recipes. When the generator fails, times out, or returns nothing usable,
/// the whole result comes from the catalog. Callers never see an error: the
/// result is non-empty whenever the catalog is.
///
/// Every returned recipe carries a freshly generated identifier.
pub struct RecipeAcquisitionService {
    generator: Arc<dyn RecipeGenerator>,
    catalog: Catalog,
    shuffler: Arc<dyn Shuffler>,
    generation_timeout: Option<Duration>,
}

impl RecipeAcquisitionService {
    pub fn new(
        generator: Arc<dyn RecipeGenerator>,
        catalog: Catalog,
        shuffler: Arc<dyn Shuffler>,
    ) -> Self {
        Self {
            generator,
            catalog,
            shuffler,
            generation_timeout: None,
        }
    }

    /// Bounds each remote generation call; an elapsed call counts as a failure
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = Some(timeout);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Acquires up to [`TARGET_RECIPE_COUNT`] recipes for the given ingredients
    pub async fn acquire(
        &self,
        ingredients: &[String],
        prefs: &AcquisitionPreferences,
    ) -> Vec<Recipe> {
        tracing::info!(
            ingredients = ingredients.len(),
            dietary = prefs.dietary.len(),
            "Acquiring recipes"
        );

        match self.generate(ingredients, prefs).await {
            Ok(generated) => {
                let fillers: Vec<Recipe> = self
                    .select_from_catalog(ingredients, prefs, TARGET_RECIPE_COUNT)
                    .into_iter()
                    .filter(|recipe| !recipe.title.eq_ignore_ascii_case(&generated.title))
                    .take(TARGET_RECIPE_COUNT - 1)
                    .collect();

                let mut recipes = Vec::with_capacity(fillers.len() + 1);
                recipes.push(generated);
                recipes.extend(fillers);

                tracing::info!(count = recipes.len(), "Generated recipe padded from catalog");
                recipes
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recipe generation failed, using catalog fallback");
                self.fallback(ingredients, prefs)
            }
        }
    }

    /// Acquires the featured recipe set
    pub async fn featured(&self) -> Vec<Recipe> {
        let ingredients: Vec<String> = FEATURED_INGREDIENTS.iter().map(|s| s.to_string()).collect();
        self.acquire(&ingredients, &AcquisitionPreferences::default())
            .await
    }

    /// One remote attempt, normalized into a recipe with defaults filled in
    async fn generate(
        &self,
        ingredients: &[String],
        prefs: &AcquisitionPreferences,
    ) -> AppResult<Recipe> {
        let request = GenerationRequest::new(ingredients, prefs);
        let call = self.generator.generate(&request);

        let generated = match self.generation_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                AppError::ExternalApi(format!(
                    "Recipe generation timed out after {}ms",
                    limit.as_millis()
                ))
            })??,
            None => call.await?,
        };

        if !generated.is_usable() {
            return Err(AppError::ExternalApi(
                "Generator returned an incomplete recipe".to_string(),
            ));
        }

        Ok(Recipe::from(generated))
    }

    /// Catalog-only acquisition
    pub fn fallback(&self, ingredients: &[String], prefs: &AcquisitionPreferences) -> Vec<Recipe> {
        let selected = self.select_from_catalog(ingredients, prefs, TARGET_RECIPE_COUNT);
        if !selected.is_empty() {
            tracing::info!(count = selected.len(), "Recipes selected from catalog");
            return selected;
        }

        tracing::warn!(
            count = FINAL_FALLBACK_COUNT,
            "Catalog selection came up empty, returning leading catalog recipes"
        );
        self.leading_recipes()
    }

    /// First catalog recipes in catalog order, re-identified
    fn leading_recipes(&self) -> Vec<Recipe> {
        self.catalog
            .recipes()
            .iter()
            .take(FINAL_FALLBACK_COUNT)
            .map(Recipe::reidentified)
            .collect()
    }

    /// Shuffle, match, then cascade over a fresh copy of the catalog
    fn select_from_catalog(
        &self,
        ingredients: &[String],
        prefs: &AcquisitionPreferences,
        limit: usize,
    ) -> Vec<Recipe> {
        let mut pool = self.catalog.snapshot();
        self.shuffler.shuffle(&mut pool);

        let candidates = match matcher::match_ingredients(ingredients, &pool) {
            Some(matches) => matches,
            None => {
                tracing::debug!("No ingredient matches, selecting from the whole catalog");
                pool.iter().collect()
            }
        };

        cascade::select(candidates, prefs)
            .into_iter()
            .take(limit)
            .map(Recipe::reidentified)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, GeneratedRecipe};
    use crate::services::providers::MockRecipeGenerator;
    use crate::services::shuffle::{PreserveOrder, SeededShuffler};
    use std::collections::HashSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn failing_generator() -> Arc<dyn RecipeGenerator> {
        let mut mock = MockRecipeGenerator::new();
        mock.expect_generate()
            .returning(|_| Err(AppError::ExternalApi("generator offline".to_string())));
        Arc::new(mock)
    }

    fn generated(title: &str) -> GeneratedRecipe {
        GeneratedRecipe {
            title: title.to_string(),
            ingredients: vec!["2 chicken thighs".to_string(), "1 cup rice".to_string()],
            instructions: vec!["Sear chicken".to_string(), "Cook rice".to_string()],
            cooking_time: None,
            difficulty: Some("Easy".to_string()),
            cuisine_type: None,
            dietary_info: None,
            nutritional_info: None,
        }
    }

    fn succeeding_generator(title: &'static str) -> Arc<dyn RecipeGenerator> {
        let mut mock = MockRecipeGenerator::new();
        mock.expect_generate().returning(move |_| Ok(generated(title)));
        Arc::new(mock)
    }

    fn service(generator: Arc<dyn RecipeGenerator>) -> RecipeAcquisitionService {
        RecipeAcquisitionService::new(generator, Catalog::reference(), Arc::new(PreserveOrder))
    }

    fn titles(recipes: &[Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.title.clone()).collect()
    }

    #[tokio::test]
    async fn test_fallback_for_unmatched_ingredient_is_non_empty() {
        let service = service(failing_generator());
        let recipes = service
            .acquire(&strings(&["unobtainium"]), &AcquisitionPreferences::default())
            .await;

        assert!(!recipes.is_empty());
        assert!(recipes.len() <= TARGET_RECIPE_COUNT);
        assert_eq!(recipes.len(), 8);
    }

    #[tokio::test]
    async fn test_fallback_uses_matches_before_whole_catalog() {
        let service = service(failing_generator());
        let recipes = service
            .acquire(&strings(&["spaghetti"]), &AcquisitionPreferences::default())
            .await;

        assert_eq!(titles(&recipes), vec!["Spaghetti Carbonara"]);
    }

    #[tokio::test]
    async fn test_fallback_applies_cascade_to_matches() {
        let service = service(failing_generator());
        let prefs = AcquisitionPreferences {
            dietary: strings(&["Vegan"]),
            cooking_time: None,
            difficulty: Some("Easy".to_string()),
        };
        let recipes = service.acquire(&strings(&["garlic"]), &prefs).await;

        // garlic: stir fry and roasted chicken; Easy keeps stir fry
        assert_eq!(titles(&recipes), vec!["Vegetable Stir Fry"]);
    }

    #[tokio::test]
    async fn test_featured_scenario_returns_bounded_fresh_recipes() {
        let service = RecipeAcquisitionService::new(
            failing_generator(),
            Catalog::reference(),
            Arc::new(SeededShuffler::new(2024)),
        );
        let recipes = service.featured().await;

        assert!((1..=TARGET_RECIPE_COUNT).contains(&recipes.len()));
        let catalog_ids: HashSet<_> = service.catalog().recipes().iter().map(|r| r.id).collect();
        assert!(recipes.iter().all(|r| !catalog_ids.contains(&r.id)));
    }

    #[tokio::test]
    async fn test_consecutive_acquisitions_never_share_ids() {
        let service = service(failing_generator());
        let ingredients = strings(&["chicken", "pasta", "vegetables"]);
        let prefs = AcquisitionPreferences::default();

        let first = service.acquire(&ingredients, &prefs).await;
        let second = service.acquire(&ingredients, &prefs).await;

        assert_eq!(titles(&first), titles(&second));
        let first_ids: HashSet<_> = first.iter().map(|r| r.id).collect();
        assert!(second.iter().all(|r| !first_ids.contains(&r.id)));
    }

    #[tokio::test]
    async fn test_ids_unique_within_one_acquisition() {
        let service = service(succeeding_generator("Chicken Rice Bowl"));
        let recipes = service
            .acquire(&strings(&["chicken"]), &AcquisitionPreferences::default())
            .await;

        let ids: HashSet<_> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), recipes.len());
    }

    #[tokio::test]
    async fn test_generated_recipe_leads_and_is_padded() {
        let service = service(succeeding_generator("Chicken Rice Bowl"));
        let recipes = service
            .acquire(&strings(&["chicken"]), &AcquisitionPreferences::default())
            .await;

        assert_eq!(recipes[0].title, "Chicken Rice Bowl");
        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
        assert_eq!(recipes[0].cooking_time, 30);
        assert_eq!(recipes[0].cuisine_type, "International");
        assert_eq!(
            titles(&recipes[1..]),
            vec![
                "Chicken Tikka Masala",
                "Caesar Salad",
                "Chicken Pad Thai",
                "Lemon Herb Roasted Chicken",
            ]
        );
    }

    #[tokio::test]
    async fn test_padding_is_capped_at_target() {
        let service = service(succeeding_generator("Kitchen Sink Stew"));
        let recipes = service
            .acquire(&strings(&["unobtainium"]), &AcquisitionPreferences::default())
            .await;

        assert_eq!(recipes.len(), TARGET_RECIPE_COUNT);
        assert_eq!(recipes[0].title, "Kitchen Sink Stew");
    }

    #[tokio::test]
    async fn test_padding_skips_duplicate_title() {
        let service = service(succeeding_generator("spaghetti carbonara"));
        let recipes = service
            .acquire(&strings(&["spaghetti"]), &AcquisitionPreferences::default())
            .await;

        assert_eq!(titles(&recipes), vec!["spaghetti carbonara"]);
    }

    #[tokio::test]
    async fn test_incomplete_generated_recipe_triggers_fallback() {
        let mut mock = MockRecipeGenerator::new();
        mock.expect_generate().returning(|_| {
            let mut recipe = generated("Empty Plate");
            recipe.ingredients.clear();
            Ok(recipe)
        });
        let service = service(Arc::new(mock));

        let recipes = service
            .acquire(&strings(&["spaghetti"]), &AcquisitionPreferences::default())
            .await;
        assert_eq!(titles(&recipes), vec!["Spaghetti Carbonara"]);
    }

    #[tokio::test]
    async fn test_generator_receives_preferences() {
        let mut mock = MockRecipeGenerator::new();
        mock.expect_generate()
            .withf(|request| {
                request.ingredients == vec!["tofu".to_string()]
                    && request.preferences == vec!["Vegan".to_string()]
                    && request.cooking_time.as_deref() == Some("20")
                    && request.difficulty.is_none()
            })
            .times(1)
            .returning(|_| Err(AppError::ExternalApi("offline".to_string())));
        let service = service(Arc::new(mock));

        let prefs = AcquisitionPreferences {
            dietary: strings(&["Vegan"]),
            cooking_time: Some("20".to_string()),
            difficulty: None,
        };
        let recipes = service.acquire(&strings(&["tofu"]), &prefs).await;
        assert!(!recipes.is_empty());
    }

    struct StalledGenerator;

    #[async_trait::async_trait]
    impl RecipeGenerator for StalledGenerator {
        async fn generate(&self, _request: &GenerationRequest) -> AppResult<GeneratedRecipe> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(generated("Never"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_generator_times_out_into_fallback() {
        let service = service(Arc::new(StalledGenerator))
            .with_generation_timeout(Duration::from_secs(5));

        let recipes = service
            .acquire(&strings(&["spaghetti"]), &AcquisitionPreferences::default())
            .await;
        assert_eq!(titles(&recipes), vec!["Spaghetti Carbonara"]);
    }

    #[test]
    fn test_leading_recipes_follow_catalog_order_with_fresh_ids() {
        let service = service(failing_generator());
        let leading = service.leading_recipes();

        assert_eq!(leading.len(), FINAL_FALLBACK_COUNT);
        for (recipe, original) in leading.iter().zip(service.catalog().recipes()) {
            assert_eq!(recipe.title, original.title);
            assert_ne!(recipe.id, original.id);
        }
    }

    #[test]
    fn test_fallback_without_ingredients_uses_whole_catalog() {
        let service = service(failing_generator());
        let recipes = service.fallback(&[], &AcquisitionPreferences::default());
        assert_eq!(recipes.len(), TARGET_RECIPE_COUNT);
        assert_eq!(recipes[0].title, "Spaghetti Carbonara");
    }
}
