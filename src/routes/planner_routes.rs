use axum::{routing::{get, post}, Router};
use crate::controllers::planner_controller::{
    // Service & reference data
    health, get_weather, list_fruits, get_fruit, list_devices,
    // Wizard steps
    get_recommendations, calculate_energy,
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
/// Handlers extract `State<AppState>` and/or `State<Config>` via
/// `FromRef<SharedState>`.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/health",                           get(health))
        .route("/weather/{city}",                   get(get_weather))
        .route("/fruits",                           get(list_fruits))
        .route("/fruits/{id}",                      get(get_fruit))
        .route("/fruits/recommendations/{location}", get(get_recommendations))
        .route("/devices",                          get(list_devices))
        .route("/calculate-energy",                 post(calculate_energy))
        .with_state(shared)
}
