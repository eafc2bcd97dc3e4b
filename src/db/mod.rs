pub mod postgres;
pub mod redis;

pub use postgres::{create_pool, run_migrations, PostgresSavedRecipeStore};
pub use redis::{create_redis_client, RedisSavedRecipeStore};
