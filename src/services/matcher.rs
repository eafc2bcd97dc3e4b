use crate::models::Recipe;

/// Finds pool recipes relevant to the requested ingredients.
///
/// A recipe matches when any of its ingredient strings contains a requested
/// ingredient, or is contained in one, compared case-insensitively. There is
/// no tokenization, so "pea" matches "peanuts". Blank requests are ignored.
///
/// Returns `None` when nothing matches so callers can fall back to the whole
/// pool. Pool order is preserved.
pub fn match_ingredients<'a>(requested: &[String], pool: &'a [Recipe]) -> Option<Vec<&'a Recipe>> {
    let wanted: Vec<String> = requested
        .iter()
        .map(|ingredient| ingredient.trim().to_lowercase())
        .filter(|ingredient| !ingredient.is_empty())
        .collect();

    if wanted.is_empty() {
        return None;
    }

    let matches: Vec<&Recipe> = pool
        .iter()
        .filter(|recipe| {
            recipe.ingredients.iter().any(|ingredient| {
                let ingredient = ingredient.trim().to_lowercase();
                wanted
                    .iter()
                    .any(|w| ingredient.contains(w.as_str()) || w.contains(ingredient.as_str()))
            })
        })
        .collect();

    if matches.is_empty() {
        None
    } else {
        Some(matches)
    }
}
