use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::config::Config;
use crate::controllers::api_error::ApiError;
use crate::error::PlannerError;
use crate::models::api::{
    CalculateEnergyRequest, CalculationsView, EnergyCalculationResponse, HealthStatus,
    RecommendationsResponse, RecommendedFruit,
};
use crate::models::energy::DeviceCategory;
use crate::models::fruit::FruitProfile;
use crate::models::weather::WeatherReport;
use crate::services::catalog::{find_device_category, DEVICE_CATEGORIES};
use crate::shared_state::AppState;

/// GET /api/health
/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    )
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        message: "Biophotonix API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/weather/{city}
/// Current conditions for a city
///
/// Unknown cities receive the provider's default snapshot with `source`
/// set to `mock-default`.
#[utoipa::path(
    get,
    path = "/api/weather/{city}",
    params(
        ("city" = String, Path, description = "City name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Weather snapshot", body = WeatherReport)
    )
)]
pub async fn get_weather(
    Path(city): Path<String>,
    State(state): State<AppState>,
) -> Json<WeatherReport> {
    let lookup = state.weather.snapshot(&city);
    Json(WeatherReport {
        city,
        weather: lookup.weather,
        timestamp: chrono::Utc::now(),
        source: lookup.source,
    })
}

/// GET /api/fruits
/// Full electrolyte catalog, in catalog order
#[utoipa::path(
    get,
    path = "/api/fruits",
    responses(
        (status = 200, description = "All fruit profiles", body = Vec<FruitProfile>)
    )
)]
pub async fn list_fruits(State(state): State<AppState>) -> Json<Vec<FruitProfile>> {
    Json(state.catalog.fruits().to_vec())
}

/// GET /api/fruits/{id}
/// One fruit profile
#[utoipa::path(
    get,
    path = "/api/fruits/{id}",
    params(
        ("id" = String, Path, description = "Fruit id, e.g. `beetroot`")
    ),
    responses(
        (status = 200, description = "Fruit profile", body = FruitProfile),
        (status = 404, description = "Fruit not in catalog")
    )
)]
pub async fn get_fruit(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FruitProfile>, ApiError> {
    Ok(Json(state.catalog.find(&id)?.clone()))
}

/// GET /api/devices
/// Device power bands used for the compatibility check
#[utoipa::path(
    get,
    path = "/api/devices",
    responses(
        (status = 200, description = "Device categories", body = Vec<DeviceCategory>)
    )
)]
pub async fn list_devices() -> Json<&'static [DeviceCategory]> {
    Json(&DEVICE_CATEGORIES[..])
}

/// GET /api/fruits/recommendations/{location}
/// Best fruits for the location's current weather
#[utoipa::path(
    get,
    path = "/api/fruits/recommendations/{location}",
    params(
        ("location" = String, Path, description = "City name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Ranked recommendations", body = RecommendationsResponse),
        (status = 400, description = "Weather snapshot out of bounds")
    )
)]
pub async fn get_recommendations(
    Path(location): Path<String>,
    State(state): State<AppState>,
    State(config): State<Config>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let weather = state.weather.snapshot(&location).weather;
    let top = state
        .recommendations(&weather, config.recommendation_count)
        .await?;

    Ok(Json(RecommendationsResponse {
        location,
        climate_type: weather.climate_type(),
        weather,
        recommendations: top.into_iter().map(RecommendedFruit::from).collect(),
        timestamp: chrono::Utc::now(),
    }))
}

/// POST /api/calculate-energy
/// Size and price an installation for a chosen fruit
///
/// `fruitType` and `location` must both be resolved; `deviceCategory` is
/// optional and only affects `deviceCompatible`.
#[utoipa::path(
    post,
    path = "/api/calculate-energy",
    request_body = CalculateEnergyRequest,
    responses(
        (status = 200, description = "Installation estimate", body = EnergyCalculationResponse),
        (status = 400, description = "Malformed body, or panel area or weather out of bounds"),
        (status = 404, description = "Unknown fruit or device category"),
        (status = 422, description = "Missing selection, or no generation to compute ROI from")
    )
)]
pub async fn calculate_energy(
    State(state): State<AppState>,
    payload: Result<Json<CalculateEnergyRequest>, JsonRejection>,
) -> Result<Json<EnergyCalculationResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!("Rejected energy calculation body: {}", e);
    })?;
    let fruit_id = required(request.fruit_type.as_deref())
        .ok_or_else(|| {
            PlannerError::Precondition("a fruit must be selected before calculating energy".into())
        })?;
    let location = required(request.location.as_deref())
        .ok_or_else(|| {
            PlannerError::Precondition("a location must be chosen before calculating energy".into())
        })?;
    let panel_area = request
        .panel_area
        .ok_or_else(|| PlannerError::invalid("panelArea is required"))?;

    let fruit = state.catalog.find(fruit_id).inspect_err(|e| {
        tracing::warn!("Rejected energy calculation: {}", e);
    })?;
    let device_category = required(request.device_category.as_deref())
        .map(find_device_category)
        .transpose()?;
    let weather = state.weather.snapshot(location).weather;

    let result = state
        .plan(fruit, panel_area, &weather, device_category)
        .await
        .inspect_err(|e| tracing::warn!("Rejected energy calculation for '{}': {}", fruit_id, e))?;

    Ok(Json(EnergyCalculationResponse {
        calculations: CalculationsView::new(&result, fruit.power_density_per_sq_ft, panel_area),
        inputs: request,
        timestamp: chrono::Utc::now(),
    }))
}

/// Treats blank strings the same as an absent field.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
