use crate::models::{AcquisitionPreferences, Recipe};

/// Narrows a candidate pool by the acquisition preferences, best effort.
///
/// Steps run in a fixed order: difficulty, then maximum cooking time, then
/// dietary tags. A step is kept only if it leaves at least one recipe;
/// otherwise the pool from before that step carries forward. The result is
/// therefore empty only when `pool` is empty.
///
/// Difficulty goes first as the strongest signal. Dietary goes last so a
/// partial dietary match is preferred over losing every candidate.
pub fn select<'a>(pool: Vec<&'a Recipe>, prefs: &AcquisitionPreferences) -> Vec<&'a Recipe> {
    let mut pool = pool;

    if let Some(difficulty) = prefs.difficulty.as_deref() {
        pool = narrow(pool, "difficulty", |recipe| {
            recipe.difficulty.as_str() == difficulty
        });
    }

    if let Some(max_minutes) = prefs.max_cooking_minutes() {
        pool = narrow(pool, "cooking_time", |recipe| {
            recipe.cooking_time <= max_minutes
        });
    }

    if !prefs.dietary.is_empty() {
        pool = narrow(pool, "dietary", |recipe| {
            recipe.has_any_dietary_tag(&prefs.dietary)
        });
    }

    pool
}

/// Applies one cascade step, keeping the input when the step would empty it
fn narrow<'a, F>(pool: Vec<&'a Recipe>, step: &'static str, keep: F) -> Vec<&'a Recipe>
where
    F: Fn(&Recipe) -> bool,
{
    let narrowed: Vec<&Recipe> = pool.iter().copied().filter(|recipe| keep(*recipe)).collect();

    if narrowed.is_empty() {
        tracing::debug!(step, candidates = pool.len(), "Cascade step skipped");
        pool
    } else {
        tracing::debug!(
            step,
            before = pool.len(),
            after = narrowed.len(),
            "Cascade step applied"
        );
        narrowed
    }
}
