use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use moka::future::Cache;

use crate::config::{CacheConfig, Config};
use crate::error::PlannerResult;
use crate::models::energy::{DeviceCategory, FinalResult};
use crate::models::fruit::{FruitProfile, ScoredFruit};
use crate::models::weather::WeatherSnapshot;
use crate::services::catalog::{FruitCatalogProvider, StaticFruitCatalog};
use crate::services::planner;
use crate::services::weather_service::{StaticWeatherProvider, WeatherProvider};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FruitCatalogProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    /// Top-N lists keyed by count and normalized weather snapshot
    recommendation_cache: Cache<String, Vec<ScoredFruit>>,
    /// Plans keyed by fruit, panel area, weather and device category
    plan_cache: Cache<String, FinalResult>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn FruitCatalogProvider>,
        weather: Arc<dyn WeatherProvider>,
        cache: &CacheConfig,
    ) -> Self {
        let ttl = Duration::from_secs(cache.ttl_secs);
        Self {
            catalog,
            weather,
            recommendation_cache: Cache::builder()
                .max_capacity(cache.max_capacity)
                .time_to_live(ttl)
                .build(),
            plan_cache: Cache::builder()
                .max_capacity(cache.max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Built-in catalog and mock weather stations, with the configured
    /// default location applied to the weather fallback.
    pub fn with_static_data(config: &Config) -> PlannerResult<Self> {
        let catalog = StaticFruitCatalog::builtin()?;
        let mut weather = StaticWeatherProvider::builtin()?;
        if let Some(location) = &config.default_location {
            weather = weather.with_default_location(location)?;
        }
        Ok(Self::new(Arc::new(catalog), Arc::new(weather), &config.cache))
    }

    /// Memoized `planner::recommend`. Cached values are exactly what the
    /// planner returned for the same inputs.
    pub async fn recommendations(
        &self,
        weather: &WeatherSnapshot,
        count: usize,
    ) -> PlannerResult<Vec<ScoredFruit>> {
        let key = format!("{}:{}", count, weather.cache_key());
        if let Some(hit) = self.recommendation_cache.get(&key).await {
            tracing::debug!("Recommendation cache hit ({})", key);
            return Ok(hit);
        }

        let top = planner::recommend(self.catalog.fruits(), weather, count)?;
        self.recommendation_cache.insert(key, top.clone()).await;
        Ok(top)
    }

    /// Memoized `planner::plan`. Errors are not cached.
    pub async fn plan(
        &self,
        fruit: &FruitProfile,
        panel_area_sq_ft: f64,
        weather: &WeatherSnapshot,
        device_category: Option<&DeviceCategory>,
    ) -> PlannerResult<FinalResult> {
        let key = format!(
            "{}:{:x}:{}:{}",
            fruit.id,
            panel_area_sq_ft.to_bits(),
            weather.cache_key(),
            device_category.map_or("none", |c| c.id.as_str()),
        );
        if let Some(hit) = self.plan_cache.get(&key).await {
            tracing::debug!("Plan cache hit ({})", key);
            return Ok(hit);
        }

        let result = planner::plan(fruit, panel_area_sq_ft, weather, device_category)?;
        self.plan_cache.insert(key, result.clone()).await;
        Ok(result)
    }
}

/// Router state. Handlers extract `State<AppState>` and/or `State<Config>`
/// through `FromRef`, so one `.with_state(shared)` covers both.
#[derive(Clone)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl SharedState {
    pub fn new(config: Config) -> PlannerResult<Self> {
        Ok(Self {
            app: AppState::with_static_data(&config)?,
            config,
        })
    }
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}
