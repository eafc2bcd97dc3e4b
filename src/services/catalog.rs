use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Difficulty, NutritionalInfo, Recipe, RecipeId},
};

/// Fixed, read-only collection of reference recipes used when the remote
/// generator is unavailable.
///
/// Entries are never handed out directly: callers copy them and assign fresh
/// identifiers per acquisition.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Arc<[Recipe]>,
}

impl Catalog {
    /// Creates a catalog from the given recipes
    ///
    /// An empty catalog is a deployment defect and is rejected up front.
    pub fn new(recipes: Vec<Recipe>) -> AppResult<Self> {
        if recipes.is_empty() {
            return Err(AppError::Configuration(
                "Recipe catalog must not be empty".to_string(),
            ));
        }

        Ok(Self {
            recipes: recipes.into(),
        })
    }

    /// The built-in reference catalog
    pub fn reference() -> Self {
        Self {
            recipes: reference_recipes().into(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Working copy for a single acquisition, safe to shuffle
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.to_vec()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    title: &str,
    ingredients: &[&str],
    instructions: &[&str],
    cooking_time: u32,
    difficulty: Difficulty,
    cuisine_type: &str,
    dietary_info: &[&str],
    nutrition: (u32, &str, &str, &str),
) -> Recipe {
    let to_strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    let (calories, protein, carbs, fat) = nutrition;

    Recipe {
        id: RecipeId::fresh(),
        title: title.to_string(),
        ingredients: to_strings(ingredients),
        instructions: to_strings(instructions),
        cooking_time,
        difficulty,
        cuisine_type: cuisine_type.to_string(),
        dietary_info: to_strings(dietary_info),
        nutritional_info: NutritionalInfo {
            calories,
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fat: fat.to_string(),
        },
    }
}

fn reference_recipes() -> Vec<Recipe> {
    vec![
        entry(
            "Spaghetti Carbonara",
            &[
                "400g spaghetti",
                "4 large eggs",
                "200g bacon or pancetta",
                "100g parmesan cheese",
                "black pepper",
                "salt",
            ],
            &[
                "Cook spaghetti according to package directions",
                "Fry bacon until crispy",
                "Beat eggs with parmesan cheese",
                "Mix hot pasta with egg mixture",
                "Add bacon and serve immediately",
            ],
            20,
            Difficulty::Medium,
            "Italian",
            &[],
            (550, "25g", "45g", "30g"),
        ),
        entry(
            "Vegetable Stir Fry",
            &[
                "2 cups mixed vegetables",
                "3 tbsp soy sauce",
                "3 cloves garlic",
                "1 inch ginger",
                "2 cups rice",
                "2 tbsp oil",
            ],
            &[
                "Heat oil in wok",
                "Add garlic and ginger",
                "Stir fry vegetables for 5 minutes",
                "Add soy sauce",
                "Serve over rice",
            ],
            15,
            Difficulty::Easy,
            "Asian",
            &["Vegetarian", "Vegan"],
            (280, "8g", "55g", "5g"),
        ),
        entry(
            "Chicken Tikka Masala",
            &[
                "500g chicken breast",
                "1 cup yogurt",
                "2 tbsp tikka masala paste",
                "1 can tomatoes",
                "1 cup cream",
                "basmati rice",
            ],
            &[
                "Marinate chicken in yogurt and spices for 30 minutes",
                "Cook chicken in a hot pan until browned",
                "Add tomatoes and tikka masala paste",
                "Simmer for 15 minutes",
                "Stir in cream and serve with rice",
            ],
            45,
            Difficulty::Medium,
            "Indian",
            &[],
            (420, "35g", "20g", "25g"),
        ),
        entry(
            "Caesar Salad",
            &[
                "2 romaine lettuce heads",
                "1/2 cup parmesan",
                "1/4 cup croutons",
                "caesar dressing",
                "2 chicken breasts",
                "black pepper",
            ],
            &[
                "Grill chicken breasts and slice",
                "Chop romaine lettuce",
                "Toss lettuce with caesar dressing",
                "Top with chicken, parmesan, and croutons",
                "Season with black pepper",
            ],
            25,
            Difficulty::Easy,
            "American",
            &[],
            (350, "30g", "15g", "20g"),
        ),
        entry(
            "Beef Tacos",
            &[
                "500g ground beef",
                "8 taco shells",
                "1 cup cheese",
                "2 tomatoes",
                "1 lettuce head",
                "taco seasoning",
                "sour cream",
            ],
            &[
                "Brown ground beef in a pan",
                "Add taco seasoning and cook for 5 minutes",
                "Warm taco shells",
                "Fill shells with beef",
                "Top with cheese, lettuce, tomatoes, and sour cream",
            ],
            20,
            Difficulty::Easy,
            "Mexican",
            &[],
            (380, "28g", "25g", "22g"),
        ),
        entry(
            "Mushroom Risotto",
            &[
                "1.5 cups arborio rice",
                "4 cups vegetable broth",
                "300g mushrooms",
                "1 onion",
                "1/2 cup white wine",
                "parmesan cheese",
            ],
            &[
                "Sauté onions and mushrooms",
                "Add rice and stir for 2 minutes",
                "Add wine and let it absorb",
                "Gradually add warm broth, stirring constantly",
                "Cook until creamy, about 20 minutes",
                "Stir in parmesan cheese",
            ],
            35,
            Difficulty::Hard,
            "Italian",
            &["Vegetarian"],
            (320, "12g", "55g", "8g"),
        ),
        entry(
            "Greek Salad",
            &[
                "3 tomatoes",
                "1 cucumber",
                "1 red onion",
                "200g feta cheese",
                "1/2 cup olives",
                "olive oil",
                "oregano",
                "lemon juice",
            ],
            &[
                "Chop tomatoes, cucumber, and red onion",
                "Combine vegetables in a large bowl",
                "Add olives and crumbled feta",
                "Drizzle with olive oil and lemon juice",
                "Season with oregano and serve",
            ],
            10,
            Difficulty::Easy,
            "Mediterranean",
            &["Vegetarian", "Gluten-Free"],
            (220, "8g", "12g", "18g"),
        ),
        entry(
            "Salmon Teriyaki",
            &[
                "4 salmon fillets",
                "1/4 cup teriyaki sauce",
                "2 tbsp honey",
                "1 tbsp sesame oil",
                "2 cups broccoli",
                "jasmine rice",
            ],
            &[
                "Mix teriyaki sauce with honey",
                "Marinate salmon for 15 minutes",
                "Heat sesame oil in a pan",
                "Cook salmon for 4 minutes each side",
                "Steam broccoli and serve with rice",
            ],
            30,
            Difficulty::Medium,
            "Asian",
            &[],
            (450, "35g", "30g", "22g"),
        ),
        entry(
            "Margherita Pizza",
            &[
                "pizza dough",
                "1/2 cup tomato sauce",
                "200g mozzarella",
                "fresh basil",
                "olive oil",
                "salt",
            ],
            &[
                "Preheat oven to 475°F",
                "Roll out pizza dough",
                "Spread tomato sauce evenly",
                "Add mozzarella cheese",
                "Bake for 12-15 minutes",
                "Top with fresh basil and olive oil",
            ],
            25,
            Difficulty::Medium,
            "Italian",
            &["Vegetarian"],
            (380, "18g", "45g", "15g"),
        ),
        entry(
            "Quinoa Buddha Bowl",
            &[
                "1 cup quinoa",
                "2 cups kale",
                "1 avocado",
                "1/2 cup chickpeas",
                "1/4 cup tahini",
                "2 tbsp lemon juice",
                "cherry tomatoes",
            ],
            &[
                "Cook quinoa according to package directions",
                "Massage kale with a little olive oil",
                "Roast chickpeas until crispy",
                "Slice avocado and halve cherry tomatoes",
                "Whisk tahini with lemon juice for dressing",
                "Arrange all ingredients in a bowl and drizzle with dressing",
            ],
            25,
            Difficulty::Easy,
            "Mediterranean",
            &["Vegetarian", "Vegan", "Gluten-Free"],
            (420, "15g", "45g", "22g"),
        ),
        entry(
            "Chicken Pad Thai",
            &[
                "200g rice noodles",
                "300g chicken",
                "2 eggs",
                "3 tbsp tamarind paste",
                "2 tbsp fish sauce",
                "bean sprouts",
                "peanuts",
                "lime",
            ],
            &[
                "Soak rice noodles in warm water",
                "Stir-fry chicken until cooked",
                "Push chicken aside, scramble eggs",
                "Add drained noodles and sauces",
                "Toss with bean sprouts",
                "Serve with peanuts and lime wedges",
            ],
            20,
            Difficulty::Medium,
            "Thai",
            &[],
            (480, "25g", "55g", "18g"),
        ),
        entry(
            "Lemon Herb Roasted Chicken",
            &[
                "1 whole chicken",
                "2 lemons",
                "rosemary",
                "thyme",
                "garlic",
                "olive oil",
                "potatoes",
                "carrots",
            ],
            &[
                "Preheat oven to 425°F",
                "Rub chicken with herbs, lemon, and olive oil",
                "Stuff cavity with lemon and herbs",
                "Surround with chopped potatoes and carrots",
                "Roast for 60-75 minutes until golden",
                "Let rest 10 minutes before carving",
            ],
            90,
            Difficulty::Medium,
            "American",
            &[],
            (520, "45g", "25g", "28g"),
        ),
    ]
}
