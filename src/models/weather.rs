use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{PlannerError, PlannerResult};

/// Cloud cover (%) above which a sky counts as overcast.
pub const CLOUDY_THRESHOLD_PCT: f64 = 50.0;

/// Current conditions at a location, as supplied by a weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    pub uv_index: f64,
    /// Cloud cover (%) [0..100]
    pub cloud_cover: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
    /// Visibility (km)
    pub visibility: f64,
    pub conditions: String,
}

/// Sky classification derived from cloud cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ClimateType {
    Sunny,
    Cloudy,
}

impl WeatherSnapshot {
    /// The single branch point shared by scoring and energy estimation.
    pub fn is_overcast(&self) -> bool {
        self.cloud_cover > CLOUDY_THRESHOLD_PCT
    }

    pub fn climate_type(&self) -> ClimateType {
        if self.is_overcast() {
            ClimateType::Cloudy
        } else {
            ClimateType::Sunny
        }
    }

    pub fn validate(&self) -> PlannerResult<()> {
        for (field, value) in [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("uvIndex", self.uv_index),
            ("cloudCover", self.cloud_cover),
            ("windSpeed", self.wind_speed),
            ("visibility", self.visibility),
        ] {
            if !value.is_finite() {
                return Err(PlannerError::invalid(format!(
                    "weather {} must be a finite number, got {}",
                    field, value
                )));
            }
        }
        for (field, value) in [
            ("uvIndex", self.uv_index),
            ("windSpeed", self.wind_speed),
            ("visibility", self.visibility),
        ] {
            if value < 0.0 {
                return Err(PlannerError::invalid(format!(
                    "{} must be non-negative, got {}",
                    field, value
                )));
            }
        }
        for (field, value) in [("humidity", self.humidity), ("cloudCover", self.cloud_cover)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(PlannerError::invalid(format!(
                    "{} must be within [0, 100], got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Normalized key over every field that can influence a computed value.
    /// `conditions` is a display label and is left out.
    pub fn cache_key(&self) -> String {
        format!(
            "{:x}:{:x}:{:x}:{:x}:{:x}:{:x}",
            self.temperature.to_bits(),
            self.humidity.to_bits(),
            self.uv_index.to_bits(),
            self.cloud_cover.to_bits(),
            self.wind_speed.to_bits(),
            self.visibility.to_bits(),
        )
    }
}

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherSource {
    /// A station known to the static provider.
    Mock,
    /// Unknown location, the provider's default snapshot was used.
    MockDefault,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    #[serde(flatten)]
    pub weather: WeatherSnapshot,
    pub timestamp: DateTime<Utc>,
    pub source: WeatherSource,
}
