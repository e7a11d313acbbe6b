use serde::Deserialize;

use crate::services::recommendation::DEFAULT_RECOMMENDATION_COUNT;

fn default_port() -> u16 { 5000 }
fn default_allowed_origins() -> Vec<String> { vec!["http://localhost:3000".to_string()] }
fn default_cache_capacity() -> u64 { 10_000 }
fn default_cache_ttl_secs() -> u64 { 3600 }
fn default_recommendation_count() -> usize { DEFAULT_RECOMMENDATION_COUNT }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
    /// Station whose weather is served for unknown locations; the built-in
    /// default snapshot when unset.
    #[serde(default)]
    pub default_location: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS; the wizard frontend in development.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            recommendation_count: default_recommendation_count(),
            default_location: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = serde_json::from_str(content)?;
        if config.recommendation_count == 0 {
            return Err("recommendation_count must be at least 1".into());
        }
        Ok(config)
    }
}
