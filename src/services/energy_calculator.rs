//! Installation sizing: power, materials and cost for one panel.
//!
//! Constants are fixed policy of the product, not tuning knobs.

use crate::error::{PlannerError, PlannerResult};
use crate::models::energy::{EnergyCalculationInput, EnergyCalculationResult};
use crate::services::scoring::climate_factor;

/// Average usable daylight per day (h)
const DAYLIGHT_HOURS: f64 = 6.0;
const DAYS_PER_MONTH: f64 = 30.0;
/// Juice yield needed per square foot of panel (ml)
const JUICE_ML_PER_SQ_FT: f64 = 175.0;
const RESIN_TO_JUICE_RATIO: f64 = 0.5;
/// Juice is bought at twice its per-kg price to cover pressing losses.
const JUICE_COST_MULTIPLIER: f64 = 2.0;
/// Activating resin (USD per litre)
const RESIN_COST_PER_LITRE: f64 = 5.0;
pub const LIFESPAN_MONTHS: u32 = 18;

pub fn calculate(input: &EnergyCalculationInput<'_>) -> PlannerResult<EnergyCalculationResult> {
    let area = input.panel_area_sq_ft;
    if !area.is_finite() || area <= 0.0 {
        return Err(PlannerError::invalid(format!(
            "panel area must be a positive number of square feet, got {}",
            area
        )));
    }
    input.fruit.validate()?;
    input.weather.validate()?;

    let fruit = input.fruit;
    let base_power = fruit.power_density_per_sq_ft * area;
    let factor = climate_factor(fruit, input.weather);

    let average_power_w = base_power * factor;
    let daily_generation_wh = average_power_w * DAYLIGHT_HOURS;
    let monthly_generation_wh = daily_generation_wh * DAYS_PER_MONTH;

    let juice_required_ml = area * JUICE_ML_PER_SQ_FT;
    let resin_required_ml = juice_required_ml * RESIN_TO_JUICE_RATIO;
    let installation_cost_usd = (juice_required_ml / 1000.0) * fruit.cost_per_kg * JUICE_COST_MULTIPLIER
        + (resin_required_ml / 1000.0) * RESIN_COST_PER_LITRE;

    let figures = [
        average_power_w,
        daily_generation_wh,
        monthly_generation_wh,
        installation_cost_usd,
    ];
    if figures.iter().any(|v| !v.is_finite()) {
        return Err(PlannerError::invalid(format!(
            "panel area of {} sq ft is too large to size",
            area
        )));
    }

    let device_compatible = input
        .device_category
        .is_none_or(|category| average_power_w >= category.minimum_power_w);

    Ok(EnergyCalculationResult {
        average_power_w,
        daily_generation_wh,
        monthly_generation_wh,
        juice_required_ml,
        resin_required_ml,
        installation_cost_usd,
        lifespan_months: LIFESPAN_MONTHS,
        efficiency_pct: fruit.efficiency * 100.0,
        climate_factor_pct: factor * 100.0,
        device_compatible,
    })
}
