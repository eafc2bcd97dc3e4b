use crate::models::{ActiveFilters, FilterOutcome, Recipe};

/// Applies display filters to the recipe set currently held.
///
/// Every set facet is applied unconditionally, in order: difficulty, maximum
/// cooking time, cuisine, dietary (any shared tag). `serving_size` has no
/// counterpart on recipes and is ignored. The pool is never modified, and an
/// empty result is a valid outcome.
pub fn apply(pool: &[Recipe], filters: &ActiveFilters) -> Vec<Recipe> {
    pool.iter()
        .filter(|recipe| filters.difficulty.map_or(true, |d| recipe.difficulty == d))
        .filter(|recipe| {
            filters
                .max_cooking_time
                .map_or(true, |max| recipe.cooking_time <= max)
        })
        .filter(|recipe| {
            filters
                .cuisine
                .as_deref()
                .map_or(true, |cuisine| recipe.cuisine_type == cuisine)
        })
        .filter(|recipe| filters.dietary.is_empty() || recipe.has_any_dietary_tag(&filters.dietary))
        .cloned()
        .collect()
}

/// Applies filters and reports how the result relates to the pool
pub fn apply_with_outcome(pool: &[Recipe], filters: &ActiveFilters) -> FilterOutcome {
    let recipes = apply(pool, filters);
    let no_matches = !pool.is_empty() && recipes.is_empty();

    if no_matches {
        tracing::debug!(total = pool.len(), "No recipes match the active filters");
    }

    FilterOutcome {
        total: pool.len(),
        filtered: filters.is_active(),
        no_matches,
        recipes,
    }
}
