//! Climate-adaptive suitability scoring.
//!
//! One weighted sum per fruit against a weather snapshot:
//!
//! | term                | weight | selected by                       |
//! |---------------------|--------|-----------------------------------|
//! | climate branch      | 40     | cloud cover > 50 %                |
//! | specialization      | 20     | fruit specialization matches sky  |
//! | UV response         | 20     | UV index ≥ 6                      |
//! | temperature window  | 15     | 15 °C ≤ temperature ≤ 35 °C       |
//! | cost                | 10     | cheaper juice scores higher       |
//! | efficiency          | 15     | overall fruit efficiency          |
//!
//! The weights add up to 120, so a score above 100 is legitimate.

use crate::models::fruit::{ClimateSpecialization, FruitProfile, ScoredFruit};
use crate::models::weather::WeatherSnapshot;

const CLIMATE_BRANCH_WEIGHT: f64 = 40.0;
const SPECIALIZATION_BONUS: f64 = 20.0;
const UV_WEIGHT: f64 = 20.0;
const TEMPERATURE_BONUS: f64 = 15.0;
const COST_WEIGHT: f64 = 10.0;
const EFFICIENCY_WEIGHT: f64 = 15.0;

const HIGH_UV_INDEX: f64 = 6.0;
const COMFORT_MIN_C: f64 = 15.0;
const COMFORT_MAX_C: f64 = 35.0;
/// Juice cost (USD/kg) at which the cost term bottoms out at zero.
const COST_CEILING_PER_KG: f64 = 0.5;

/// Highest score the formula can produce.
pub const MAX_CLIMATE_SCORE: i32 = 120;

/// The efficiency that scales output under this sky: low-light when
/// overcast, high-UV otherwise. Never interpolated.
pub fn climate_factor(fruit: &FruitProfile, weather: &WeatherSnapshot) -> f64 {
    if weather.is_overcast() {
        fruit.low_light_efficiency
    } else {
        fruit.high_uv_efficiency
    }
}

/// Unrounded contribution of each scoring term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub climate_branch: f64,
    pub specialization: f64,
    pub uv: f64,
    pub temperature: f64,
    pub cost: f64,
    pub efficiency: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.climate_branch
            + self.specialization
            + self.uv
            + self.temperature
            + self.cost
            + self.efficiency
    }
}

pub fn breakdown(fruit: &FruitProfile, weather: &WeatherSnapshot) -> ScoreBreakdown {
    let favoured = if weather.is_overcast() {
        ClimateSpecialization::Cloudy
    } else {
        ClimateSpecialization::Sunny
    };

    let uv_efficiency = if weather.uv_index >= HIGH_UV_INDEX {
        fruit.high_uv_efficiency
    } else {
        fruit.low_light_efficiency
    };

    let in_window = (COMFORT_MIN_C..=COMFORT_MAX_C).contains(&weather.temperature);

    ScoreBreakdown {
        climate_branch: climate_factor(fruit, weather) * CLIMATE_BRANCH_WEIGHT,
        specialization: if fruit.climate_specialization == favoured {
            SPECIALIZATION_BONUS
        } else {
            0.0
        },
        uv: uv_efficiency * UV_WEIGHT,
        temperature: if in_window { TEMPERATURE_BONUS } else { 0.0 },
        cost: (1.0 - (fruit.cost_per_kg / COST_CEILING_PER_KG).min(1.0)) * COST_WEIGHT,
        efficiency: fruit.efficiency * EFFICIENCY_WEIGHT,
    }
}

pub fn climate_score(fruit: &FruitProfile, weather: &WeatherSnapshot) -> i32 {
    breakdown(fruit, weather).total().round() as i32
}

/// Scores every fruit; output has the input's length and order.
pub fn score(fruits: &[FruitProfile], weather: &WeatherSnapshot) -> Vec<ScoredFruit> {
    fruits
        .iter()
        .map(|fruit| ScoredFruit {
            fruit: fruit.clone(),
            climate_score: climate_score(fruit, weather),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{FruitCatalogProvider, StaticFruitCatalog};
    use approx::assert_relative_eq;

    fn weather(cloud_cover: f64, uv_index: f64, temperature: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            humidity: 60.0,
            uv_index,
            cloud_cover,
            wind_speed: 10.0,
            visibility: 10.0,
            conditions: "Test".into(),
        }
    }

    fn fruit(id: &str) -> FruitProfile {
        StaticFruitCatalog::builtin().unwrap().find(id).unwrap().clone()
    }

    #[test]
    fn test_beetroot_in_london() {
        let london = weather(65.0, 3.0, 15.0);
        let b = breakdown(&fruit("beetroot"), &london);
        assert_relative_eq!(b.climate_branch, 36.0);
        assert_relative_eq!(b.specialization, 20.0);
        assert_relative_eq!(b.uv, 18.0);
        assert_relative_eq!(b.temperature, 15.0);
        assert_relative_eq!(b.cost, 7.6, epsilon = 1e-9);
        assert_relative_eq!(b.efficiency, 12.75);
        assert_relative_eq!(b.total(), 109.35, epsilon = 1e-9);
        assert_eq!(climate_score(&fruit("beetroot"), &london), 109);
    }

    #[test]
    fn test_orange_in_london() {
        let london = weather(65.0, 3.0, 15.0);
        let b = breakdown(&fruit("orange"), &london);
        assert_relative_eq!(b.climate_branch, 18.0);
        assert_relative_eq!(b.specialization, 0.0);
        assert_relative_eq!(b.uv, 9.0);
        assert_relative_eq!(b.cost, 6.4, epsilon = 1e-9);
        assert_relative_eq!(b.efficiency, 13.8, epsilon = 1e-9);
        assert_eq!(climate_score(&fruit("orange"), &london), 62);
    }

    #[test]
    fn test_climate_branch_follows_cloud_cover() {
        let orange = fruit("orange");
        for cover in [51.0, 75.0, 100.0] {
            let b = breakdown(&orange, &weather(cover, 3.0, 20.0));
            assert_relative_eq!(b.climate_branch, orange.low_light_efficiency * 40.0);
        }
        for cover in [0.0, 25.0, 50.0] {
            let b = breakdown(&orange, &weather(cover, 3.0, 20.0));
            assert_relative_eq!(b.climate_branch, orange.high_uv_efficiency * 40.0);
            assert_relative_eq!(b.specialization, 20.0);
        }
    }

    #[test]
    fn test_uv_and_temperature_boundaries() {
        let mango = fruit("mango");
        let b = breakdown(&mango, &weather(20.0, 6.0, 35.0));
        assert_relative_eq!(b.uv, mango.high_uv_efficiency * 20.0);
        assert_relative_eq!(b.temperature, 15.0);

        let b = breakdown(&mango, &weather(20.0, 5.9, 35.1));
        assert_relative_eq!(b.uv, mango.low_light_efficiency * 20.0);
        assert_relative_eq!(b.temperature, 0.0);

        let b = breakdown(&mango, &weather(20.0, 5.9, 14.9));
        assert_relative_eq!(b.temperature, 0.0);
    }

    #[test]
    fn test_cost_term_floors_at_zero() {
        let mut expensive = fruit("blueberry");
        expensive.cost_per_kg = 2.0;
        let b = breakdown(&expensive, &weather(60.0, 2.0, 10.0));
        assert_relative_eq!(b.cost, 0.0);
    }

    #[test]
    fn test_score_can_exceed_hundred_but_not_max() {
        let mut ideal = fruit("beetroot");
        ideal.efficiency = 1.0;
        ideal.low_light_efficiency = 1.0;
        ideal.high_uv_efficiency = 1.0;
        ideal.cost_per_kg = 0.0;

        let s = climate_score(&ideal, &weather(80.0, 8.0, 20.0));
        assert_eq!(s, MAX_CLIMATE_SCORE);
        assert!(s > 100);

        let catalog = StaticFruitCatalog::builtin().unwrap();
        for w in [weather(65.0, 3.0, 15.0), weather(25.0, 7.0, 22.0), weather(40.0, 5.0, 18.0)] {
            for scored in score(catalog.fruits(), &w) {
                assert!((0..=MAX_CLIMATE_SCORE).contains(&scored.climate_score));
            }
        }
    }

    #[test]
    fn test_score_preserves_length_and_order() {
        let catalog = StaticFruitCatalog::builtin().unwrap();
        let before = catalog.fruits().to_vec();
        let scored = score(catalog.fruits(), &weather(65.0, 3.0, 15.0));

        assert_eq!(scored.len(), before.len());
        for (s, f) in scored.iter().zip(&before) {
            assert_eq!(&s.fruit, f);
        }
        assert_eq!(catalog.fruits(), before.as_slice());
    }
}
