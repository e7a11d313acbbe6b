// API integration tests
//
// Drive the full router in-process with `oneshot`; no socket is bound.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use biophotonix::{create_router, Config, SharedState};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn create_test_app() -> axum::Router {
    create_router(SharedState::new(Config::default()).expect("built-in data is valid"))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, json_response(response).await)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, json_response(response).await)
}

// =========================================================================
// Service & reference data
// =========================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_weather_known_and_default() {
    let (status, body) = get("/api/weather/London").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "London");
    assert_eq!(body["cloudCover"], 65.0);
    assert_eq!(body["source"], "mock");

    let (_, body) = get("/api/weather/Atlantis").await;
    assert_eq!(body["source"], "mock-default");
    assert_eq!(body["temperature"], 20.0);
}

#[tokio::test]
async fn test_configured_default_location_serves_unknown_cities() {
    let config = Config {
        default_location: Some("London".to_string()),
        ..Config::default()
    };
    let app = create_router(SharedState::new(config).unwrap());
    let response = app
        .oneshot(Request::builder().uri("/api/weather/Atlantis").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = json_response(response).await;
    assert_eq!(body["source"], "mock-default");
    assert_eq!(body["cloudCover"], 65.0);
}

#[tokio::test]
async fn test_fruit_catalog_endpoints() {
    let (status, body) = get("/api/fruits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = get("/api/fruits/mango").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scientificName"], "Mangifera indica");

    let (status, body) = get("/api/fruits/durian").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_device_categories() {
    let (status, body) = get("/api/devices").await;
    assert_eq!(status, StatusCode::OK);
    let floors: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["minimumPowerW"].as_f64().unwrap())
        .collect();
    assert_eq!(floors, [0.0, 5.0, 50.0]);
}

// =========================================================================
// Recommendations
// =========================================================================

#[tokio::test]
async fn test_recommendations_for_london() {
    let (status, body) = get("/api/fruits/recommendations/london").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["climateType"], "Cloudy");

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["id"], "beetroot");
    assert_eq!(recs[0]["climateScore"], 109);
    assert_eq!(recs[0]["suitability"], "excellent");

    let scores: Vec<i64> = recs.iter().map(|r| r["climateScore"].as_i64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_recommendations_are_stable_across_cache() {
    let app = create_test_app();
    let mut seen = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/fruits/recommendations/tokyo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_response(response).await;
        seen.push(body["recommendations"].clone());
    }
    assert_eq!(seen[0], seen[1]);
}

// =========================================================================
// Energy calculation
// =========================================================================

#[tokio::test]
async fn test_calculate_energy_orange_new_york() {
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({
            "fruitType": "orange",
            "panelArea": 2,
            "location": "New York",
            "deviceCategory": "small"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let calc = &body["calculations"];
    assert_eq!(calc["averagePower"], "3.42");
    assert_eq!(calc["dailyGeneration"], "20.5");
    assert_eq!(calc["monthlyGeneration"], "616");
    assert_eq!(calc["juiceRequired"], "350");
    assert_eq!(calc["resinRequired"], "175");
    assert_eq!(calc["installationCost"], "1.00");
    assert_eq!(calc["lifespan"], 18);
    assert_eq!(calc["efficiency"], "92");
    assert_eq!(calc["climateFactor"], "95");
    assert_eq!(calc["deviceCompatible"], true);
    assert_eq!(calc["roiMonths"], 1);
    assert_eq!(body["inputs"]["fruitType"], "orange");
}

#[tokio::test]
async fn test_calculate_energy_zero_area_rejected() {
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "fruitType": "beetroot", "panelArea": 0, "location": "london" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
    assert!(body.get("calculations").is_none());
}

#[tokio::test]
async fn test_calculate_energy_requires_selection() {
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "panelArea": 2, "location": "london" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "precondition_failed");
}

#[tokio::test]
async fn test_calculate_energy_unknown_fruit_is_not_defaulted() {
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "fruitType": "durian", "panelArea": 2, "location": "london" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_calculate_energy_unknown_device_category() {
    let (status, _) = post_json(
        "/api/calculate-energy",
        json!({
            "fruitType": "beetroot",
            "panelArea": 2,
            "location": "london",
            "deviceCategory": "industrial"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_large_devices_need_fifty_watts() {
    let (_, body) = post_json(
        "/api/calculate-energy",
        json!({
            "fruitType": "beetroot",
            "panelArea": 10,
            "location": "london",
            "deviceCategory": "large"
        }),
    )
    .await;
    // 1.2 W/sq ft * 10 sq ft * 0.90 = 10.8 W
    assert_eq!(body["calculations"]["averagePower"], "10.80");
    assert_eq!(body["calculations"]["deviceCompatible"], false);
}

#[tokio::test]
async fn test_installation_cost_rounds_stored_value() {
    // 4.795 is stored as 4.79499..., shown the way the results screen shows it
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "fruitType": "beetroot", "panelArea": 10, "location": "london" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calculations"]["installationCost"], "4.79");
}

#[tokio::test]
async fn test_calculate_energy_overflowing_area_rejected() {
    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "fruitType": "orange", "panelArea": 1e308, "location": "tokyo" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_malformed_body_gets_json_error() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-energy")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"fruitType": "orange", "panelArea": "#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_response(response).await;
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].is_string());

    let (status, body) = post_json(
        "/api/calculate-energy",
        json!({ "fruitType": "orange", "panelArea": "two", "location": "tokyo" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}
