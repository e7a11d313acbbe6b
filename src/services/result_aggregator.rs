use crate::error::{PlannerError, PlannerResult};
use crate::models::energy::{EnergyCalculationResult, FinalResult};

/// Value assigned to one generated watt-hour (USD)
pub const ENERGY_VALUE_USD_PER_WH: f64 = 0.12;

/// Adds the monthly value and payback period to a calculator result.
///
/// An installation with no monthly generation has no payback period and is
/// reported as `DivisionByZero` rather than an infinite or NaN month count.
pub fn aggregate(energy: EnergyCalculationResult) -> PlannerResult<FinalResult> {
    let monthly_value_usd = energy.monthly_generation_wh * ENERGY_VALUE_USD_PER_WH;
    if !(monthly_value_usd > 0.0) || !monthly_value_usd.is_finite() {
        return Err(PlannerError::DivisionByZero(format!(
            "cannot compute ROI with a monthly generation of {} Wh",
            energy.monthly_generation_wh
        )));
    }

    let roi_months = (energy.installation_cost_usd / monthly_value_usd).ceil() as u64;

    Ok(FinalResult {
        energy,
        monthly_value_usd,
        roi_months,
    })
}
