//! The two entry points the API layer calls. Each takes every value it
//! needs as an argument; nothing is read from session state.

use crate::error::PlannerResult;
use crate::models::energy::{DeviceCategory, EnergyCalculationInput, FinalResult};
use crate::models::fruit::{FruitProfile, ScoredFruit};
use crate::models::weather::WeatherSnapshot;
use crate::services::energy_calculator::calculate;
use crate::services::recommendation::select_top;
use crate::services::result_aggregator::aggregate;
use crate::services::scoring::score;

/// Scores the catalog against the weather and keeps the best `count`.
pub fn recommend(
    fruits: &[FruitProfile],
    weather: &WeatherSnapshot,
    count: usize,
) -> PlannerResult<Vec<ScoredFruit>> {
    weather.validate()?;
    Ok(select_top(&score(fruits, weather), count))
}

/// Sizes an installation for an already chosen fruit and prices its payback.
pub fn plan(
    fruit: &FruitProfile,
    panel_area_sq_ft: f64,
    weather: &WeatherSnapshot,
    device_category: Option<&DeviceCategory>,
) -> PlannerResult<FinalResult> {
    let energy = calculate(&EnergyCalculationInput {
        fruit,
        panel_area_sq_ft,
        weather,
        device_category,
    })?;
    aggregate(energy)
}
