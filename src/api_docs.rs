use utoipa::OpenApi;
use crate::controllers::planner_controller;
use crate::models::{api, energy, fruit, weather};

#[derive(OpenApi)]
#[openapi(
    paths(
        planner_controller::health,
        planner_controller::get_weather,
        planner_controller::list_fruits,
        planner_controller::get_fruit,
        planner_controller::list_devices,
        planner_controller::get_recommendations,
        planner_controller::calculate_energy
    ),
    components(
        schemas(
            fruit::FruitProfile,
            fruit::ScoredFruit,
            fruit::SuitabilityBand,
            weather::WeatherSnapshot,
            weather::WeatherReport,
            energy::DeviceCategory,
            energy::FinalResult,
            api::RecommendationsResponse,
            api::CalculateEnergyRequest,
            api::EnergyCalculationResponse
        )
    ),
    tags(
        (name = "biophotonix", description = "Fruit electrolyte panel planner API")
    )
)]
pub struct ApiDoc;
