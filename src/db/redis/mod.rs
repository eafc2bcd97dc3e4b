pub mod saved;

pub use saved::create_redis_client;
pub use saved::CacheKey;
pub use saved::RedisSavedRecipeStore;
