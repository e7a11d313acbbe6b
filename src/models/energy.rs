use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::fruit::FruitProfile;
use crate::models::weather::WeatherSnapshot;

// ─── Device categories ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategoryId {
    Small,
    Medium,
    Large,
}

impl DeviceCategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// A power-demand band. Only drives the compatibility flag, never the output.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCategory {
    pub id: DeviceCategoryId,
    #[schema(value_type = String)]
    pub name: &'static str,
    /// Average output the panel must reach to drive this band (W)
    pub minimum_power_w: f64,
    #[schema(value_type = String)]
    pub power_range: &'static str,
    #[schema(value_type = String)]
    pub panel_size: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = Vec<String>)]
    pub examples: &'static [&'static str],
}

// ─── Energy calculation ──────────────────────────────────────────────────────

/// Fully resolved inputs for one installation estimate.
#[derive(Debug, Clone, Copy)]
pub struct EnergyCalculationInput<'a> {
    pub fruit: &'a FruitProfile,
    pub panel_area_sq_ft: f64,
    pub weather: &'a WeatherSnapshot,
    pub device_category: Option<&'a DeviceCategory>,
}

/// Raw, full-precision output of the energy calculator.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCalculationResult {
    /// Average output while lit (W)
    pub average_power_w: f64,
    /// Energy per day (Wh)
    pub daily_generation_wh: f64,
    /// Energy per 30-day month (Wh)
    pub monthly_generation_wh: f64,
    pub juice_required_ml: f64,
    pub resin_required_ml: f64,
    pub installation_cost_usd: f64,
    pub lifespan_months: u32,
    /// Fruit efficiency as a percentage [0..100]
    pub efficiency_pct: f64,
    /// Selected climate factor as a percentage [0..100]
    pub climate_factor_pct: f64,
    pub device_compatible: bool,
}

/// Calculator output plus the derived financial figures.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    #[serde(flatten)]
    pub energy: EnergyCalculationResult,
    /// Value of one month of generation (USD)
    pub monthly_value_usd: f64,
    /// Months until the installation pays for itself
    pub roi_months: u64,
}
