use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{PlannerError, PlannerResult};

/// Sky condition a fruit electrolyte is bred for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClimateSpecialization {
    Sunny,
    Cloudy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Acidity {
    Low,
    Medium,
    High,
}

/// Catalog entry for one electrolyte source.
///
/// Profiles are built once at startup and never mutated afterwards.
/// Field names on the wire match the existing wizard frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitProfile {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub climate_specialization: ClimateSpecialization,
    pub ph_level: f64,
    pub acidity: Acidity,
    /// Overall conversion efficiency [0..1]
    pub efficiency: f64,
    /// Juice cost (USD per kg)
    pub cost_per_kg: f64,
    /// Output at full efficiency (W per sq ft)
    pub power_density_per_sq_ft: f64,
    /// Efficiency under overcast skies [0..1]
    pub low_light_efficiency: f64,
    /// Efficiency under strong sun [0..1]
    #[serde(rename = "highUVEfficiency")]
    pub high_uv_efficiency: f64,
    /// Pigment name → relative amount. Informational only.
    pub photosynthetic_pigments: BTreeMap<String, u32>,
    pub description: String,
}

impl FruitProfile {
    /// Checks the numeric invariants the scoring and energy stages rely on.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.id.trim().is_empty() {
            return Err(PlannerError::invalid("fruit id must not be empty"));
        }
        for (field, value) in [
            ("efficiency", self.efficiency),
            ("lowLightEfficiency", self.low_light_efficiency),
            ("highUVEfficiency", self.high_uv_efficiency),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::invalid(format!(
                    "{} of '{}' must be within [0, 1], got {}",
                    field, self.id, value
                )));
            }
        }
        for (field, value) in [
            ("costPerKg", self.cost_per_kg),
            ("powerDensityPerSqFt", self.power_density_per_sq_ft),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::invalid(format!(
                    "{} of '{}' must be a non-negative number, got {}",
                    field, self.id, value
                )));
            }
        }
        Ok(())
    }
}

/// A profile paired with its climate score for one weather snapshot.
///
/// The score is a rounded weighted sum with a true range of 0..=120; it is
/// deliberately not clamped to the 0..=100 meter the frontend draws.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFruit {
    #[serde(flatten)]
    pub fruit: FruitProfile,
    pub climate_score: i32,
}

/// Coarse label for a climate score, used to color the recommendation cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityBand {
    Excellent,
    Good,
    Fair,
}

impl SuitabilityBand {
    pub fn for_score(score: i32) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else {
            Self::Fair
        }
    }
}
