use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Remote recipe generator endpoint. When unset every acquisition is
    /// served from the reference catalog.
    #[serde(default)]
    pub generator_url: Option<String>,

    /// Bearer token sent to the generator endpoint
    #[serde(default)]
    pub generator_api_key: Option<String>,

    /// Upper bound on a single remote generation call
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    /// PostgreSQL connection URL for saved recipes of signed-in users
    #[serde(default)]
    pub database_url: Option<String>,

    /// Redis connection URL for saved recipes of anonymous sessions
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Fixed seed for the catalog shuffle
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_generation_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}
