use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::energy::FinalResult;
use crate::models::fruit::{ScoredFruit, SuitabilityBand};
use crate::models::weather::{ClimateType, WeatherSnapshot};

// ─── Health ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

// ─── Recommendations ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFruit {
    #[serde(flatten)]
    pub scored: ScoredFruit,
    pub suitability: SuitabilityBand,
}

impl From<ScoredFruit> for RecommendedFruit {
    fn from(scored: ScoredFruit) -> Self {
        let suitability = SuitabilityBand::for_score(scored.climate_score);
        Self { scored, suitability }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub location: String,
    pub weather: WeatherSnapshot,
    pub climate_type: ClimateType,
    pub recommendations: Vec<RecommendedFruit>,
    pub timestamp: DateTime<Utc>,
}

// ─── Energy calculation ──────────────────────────────────────────────────────

/// Body of `POST /api/calculate-energy`.
///
/// Every field is optional on the wire so that a missing selection surfaces
/// as a typed planner error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateEnergyRequest {
    pub fruit_type: Option<String>,
    /// Panel area (sq ft)
    pub panel_area: Option<f64>,
    pub location: Option<String>,
    pub device_category: Option<String>,
}

/// Display-rounded figures, in the string formats the results screens expect.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculationsView {
    /// W, 2 decimals
    pub average_power: String,
    /// Wh, 1 decimal
    pub daily_generation: String,
    /// Wh, 0 decimals
    pub monthly_generation: String,
    /// ml
    pub juice_required: String,
    /// ml
    pub resin_required: String,
    /// USD, 2 decimals
    pub installation_cost: String,
    /// months
    pub lifespan: u32,
    /// %
    pub efficiency: String,
    /// %
    pub climate_factor: String,
    pub device_compatible: bool,
    /// W per sq ft
    pub power_density: f64,
    /// Side of a square panel with this area (ft, 1 decimal)
    pub panel_side_ft: String,
    /// USD, 2 decimals
    pub monthly_value: String,
    pub roi_months: u64,
}

impl CalculationsView {
    pub fn new(result: &FinalResult, power_density: f64, panel_area_sq_ft: f64) -> Self {
        let energy = &result.energy;
        Self {
            average_power: to_fixed(energy.average_power_w, 2),
            daily_generation: to_fixed(energy.daily_generation_wh, 1),
            monthly_generation: to_fixed(energy.monthly_generation_wh, 0),
            juice_required: to_fixed(energy.juice_required_ml, 0),
            resin_required: to_fixed(energy.resin_required_ml, 0),
            installation_cost: to_fixed(energy.installation_cost_usd, 2),
            lifespan: energy.lifespan_months,
            efficiency: to_fixed(energy.efficiency_pct, 0),
            climate_factor: to_fixed(energy.climate_factor_pct, 0),
            device_compatible: energy.device_compatible,
            power_density,
            panel_side_ft: to_fixed(panel_area_sq_ft.sqrt(), 1),
            monthly_value: to_fixed(result.monthly_value_usd, 2),
            roi_months: result.roi_months,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCalculationResponse {
    pub calculations: CalculationsView,
    pub inputs: CalculateEnergyRequest,
    pub timestamp: DateTime<Utc>,
}

/// Fixed-point formatting that matches the frontend's figures.
///
/// Rounds the exact decimal value of the double, ties away from zero. A stored
/// value just below a tie (4.795 is 4.79499999...) rounds down, an exact tie
/// such as 262.5 rounds up. Values outside `Decimal`'s range fall back to
/// `format!`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", decimals, rounded)
        }
        None => format!("{:.*}", decimals, value),
    }
}
