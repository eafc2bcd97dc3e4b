use std::sync::Mutex;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::models::Recipe;

/// Source of the randomized catalog ordering used by fallback selection.
///
/// Injected so tests and reproducible deployments can fix the ordering.
pub trait Shuffler: Send + Sync {
    fn shuffle(&self, recipes: &mut [Recipe]);
}

/// Shuffles with the thread-local random generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomShuffler;

impl Shuffler for RandomShuffler {
    fn shuffle(&self, recipes: &mut [Recipe]) {
        recipes.shuffle(&mut rand::thread_rng());
    }
}

/// Shuffles from a seeded generator; the same seed yields the same sequence
/// of orderings.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&self, recipes: &mut [Recipe]) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        recipes.shuffle(&mut *rng);
    }
}

/// Leaves catalog order untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct PreserveOrder;

impl Shuffler for PreserveOrder {
    fn shuffle(&self, _recipes: &mut [Recipe]) {}
}
