use std::sync::Arc;

use smartrecipe_api::{
    api::{create_router, AppState},
    config::Config,
    db,
    services::{
        providers::{DisabledGenerator, HttpRecipeGenerator, RecipeGenerator},
        shuffle::{RandomShuffler, SeededShuffler, Shuffler},
        Catalog, InMemorySavedRecipeStore, RecipeAcquisitionService, SavedRecipeService,
        SavedRecipeStore,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartrecipe_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let generator: Arc<dyn RecipeGenerator> = match &config.generator_url {
        Some(url) => {
            tracing::info!(url = %url, "Using remote recipe generator");
            Arc::new(HttpRecipeGenerator::new(
                url.clone(),
                config.generator_api_key.clone(),
                config.generation_timeout(),
            )?)
        }
        None => {
            tracing::warn!("GENERATOR_URL not set, serving recipes from the catalog only");
            Arc::new(DisabledGenerator)
        }
    };

    let shuffler: Arc<dyn Shuffler> = match config.shuffle_seed {
        Some(seed) => Arc::new(SeededShuffler::new(seed)),
        None => Arc::new(RandomShuffler),
    };

    let acquisition = RecipeAcquisitionService::new(generator, Catalog::reference(), shuffler)
        .with_generation_timeout(config.generation_timeout());

    let users: Arc<dyn SavedRecipeStore> = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url).await?;
            db::run_migrations(&pool).await?;
            tracing::info!("Saved recipes for signed-in users stored in PostgreSQL");
            Arc::new(db::PostgresSavedRecipeStore::new(pool))
        }
        None => Arc::new(InMemorySavedRecipeStore::new()),
    };

    let sessions: Arc<dyn SavedRecipeStore> = match &config.redis_url {
        Some(url) => {
            let client = db::create_redis_client(url)?;
            tracing::info!("Saved recipes for anonymous sessions stored in Redis");
            Arc::new(db::RedisSavedRecipeStore::new(client).await?)
        }
        None => Arc::new(InMemorySavedRecipeStore::new()),
    };

    let state = AppState::new(acquisition, SavedRecipeService::new(users, sessions));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
