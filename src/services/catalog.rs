//! Static electrolyte-source catalog and device power bands.
//!
//! Both tables are fixed at process start. The catalog sits behind
//! `FruitCatalogProvider` so a database-backed source can replace it
//! without touching scoring or energy code.

use std::collections::{BTreeMap, HashSet};

use crate::error::{PlannerError, PlannerResult};
use crate::models::energy::{DeviceCategory, DeviceCategoryId};
use crate::models::fruit::{Acidity, ClimateSpecialization, FruitProfile};

pub trait FruitCatalogProvider: Send + Sync {
    /// All profiles, in catalog order. Ties in ranking keep this order.
    fn fruits(&self) -> &[FruitProfile];

    fn find(&self, id: &str) -> PlannerResult<&FruitProfile> {
        self.fruits()
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| PlannerError::not_found("fruit", id))
    }
}

#[derive(Debug, Clone)]
pub struct StaticFruitCatalog {
    fruits: Vec<FruitProfile>,
}

impl StaticFruitCatalog {
    /// Builds a catalog after checking every profile and id uniqueness.
    pub fn new(fruits: Vec<FruitProfile>) -> PlannerResult<Self> {
        let mut seen = HashSet::new();
        for fruit in &fruits {
            fruit.validate()?;
            if !seen.insert(fruit.id.as_str()) {
                return Err(PlannerError::invalid(format!(
                    "duplicate fruit id '{}' in catalog",
                    fruit.id
                )));
            }
        }
        Ok(Self { fruits })
    }

    /// The five built-in electrolyte sources, checked like any other catalog.
    pub fn builtin() -> PlannerResult<Self> {
        Self::new(builtin_fruits())
    }
}

impl FruitCatalogProvider for StaticFruitCatalog {
    fn fruits(&self) -> &[FruitProfile] {
        &self.fruits
    }
}

fn pigments(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    scientific_name: &str,
    climate_specialization: ClimateSpecialization,
    ph_level: f64,
    acidity: Acidity,
    efficiency: f64,
    cost_per_kg: f64,
    power_density_per_sq_ft: f64,
    low_light_efficiency: f64,
    high_uv_efficiency: f64,
    photosynthetic_pigments: BTreeMap<String, u32>,
    description: &str,
) -> FruitProfile {
    FruitProfile {
        id: id.to_string(),
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        climate_specialization,
        ph_level,
        acidity,
        efficiency,
        cost_per_kg,
        power_density_per_sq_ft,
        low_light_efficiency,
        high_uv_efficiency,
        photosynthetic_pigments,
        description: description.to_string(),
    }
}

fn builtin_fruits() -> Vec<FruitProfile> {
    use Acidity::*;
    use ClimateSpecialization::*;

    vec![
        profile(
            "beetroot", "Beetroot", "Beta vulgaris", Cloudy, 5.8, Medium,
            0.85, 0.12, 1.2, 0.90, 0.65,
            pigments(&[("betalains", 50), ("flavonoids", 30)]),
            "Excellent performance in cloudy regions with high betalain pigments",
        ),
        profile(
            "orange", "Orange", "Citrus sinensis", Sunny, 3.5, High,
            0.92, 0.18, 1.8, 0.45, 0.95,
            pigments(&[("carotenoids", 40), ("flavonoids", 25)]),
            "Optimized for sunny regions with high UV response",
        ),
        profile(
            "purple_grape", "Purple Grapes", "Vitis vinifera", Cloudy, 3.4, High,
            0.78, 0.25, 1.0, 0.85, 0.70,
            pigments(&[("anthocyanins", 45), ("flavonoids", 35)]),
            "Rich in anthocyanins, performs well in overcast conditions",
        ),
        profile(
            "mango", "Mango", "Mangifera indica", Sunny, 4.2, Medium,
            0.88, 0.35, 1.6, 0.50, 0.92,
            pigments(&[("carotenoids", 35), ("flavonoids", 20)]),
            "Tropical adaptation with heat-resistant electrolytes",
        ),
        profile(
            "blueberry", "Blueberry", "Vaccinium corymbosum", Cloudy, 4.8, Medium,
            0.75, 0.42, 0.9, 0.80, 0.68,
            pigments(&[("anthocyanins", 40), ("flavonoids", 30)]),
            "High flavonoids, effective in cloudy weather",
        ),
    ]
}

// ─── Device categories ───────────────────────────────────────────────────────

pub static DEVICE_CATEGORIES: [DeviceCategory; 3] = [
    DeviceCategory {
        id: DeviceCategoryId::Small,
        name: "Small Devices",
        minimum_power_w: 0.0,
        power_range: "<5W",
        panel_size: "0.5-2 sq ft",
        description: "Perfect for charging phones, LED lights, and small electronics",
        examples: &["LED lights (1-3W)", "Phone chargers (5W)", "USB fans (2-4W)", "Bluetooth speakers"],
    },
    DeviceCategory {
        id: DeviceCategoryId::Medium,
        name: "Medium Devices",
        minimum_power_w: 5.0,
        power_range: "5-50W",
        panel_size: "2-10 sq ft",
        description: "Ideal for laptops, tablets, and small appliances",
        examples: &["Laptop chargers (45W)", "Tablets (10-25W)", "Small fans (15-30W)", "LED TV strips (20-40W)"],
    },
    DeviceCategory {
        id: DeviceCategoryId::Large,
        name: "Large Devices",
        minimum_power_w: 50.0,
        power_range: "50-500W",
        panel_size: "10-50 sq ft",
        description: "Power desktop computers, entertainment systems, and appliances",
        examples: &["Desktop computers (200-400W)", "Gaming consoles (150-300W)", "Mini-fridges (100-200W)"],
    },
];

pub fn find_device_category(id: &str) -> PlannerResult<&'static DeviceCategory> {
    let wanted = id.trim().to_lowercase();
    DEVICE_CATEGORIES
        .iter()
        .find(|c| c.id.as_str() == wanted)
        .ok_or_else(|| PlannerError::not_found("device category", id))
}
