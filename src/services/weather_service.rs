use std::collections::HashMap;

use crate::error::{PlannerError, PlannerResult};
use crate::models::weather::{WeatherSnapshot, WeatherSource};

/// Supplies already-fetched conditions for a location. No I/O happens in
/// the planning core; implementations own any fetching or caching.
pub trait WeatherProvider: Send + Sync {
    fn snapshot(&self, location: &str) -> WeatherLookup;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLookup {
    pub weather: WeatherSnapshot,
    pub source: WeatherSource,
}

/// Lower-cased, trimmed form used as the station key.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Hard-coded stations with a default snapshot for everywhere else.
#[derive(Debug, Clone)]
pub struct StaticWeatherProvider {
    stations: HashMap<String, WeatherSnapshot>,
    fallback: WeatherSnapshot,
}

impl StaticWeatherProvider {
    pub fn new(
        stations: impl IntoIterator<Item = (String, WeatherSnapshot)>,
        fallback: WeatherSnapshot,
    ) -> PlannerResult<Self> {
        fallback.validate()?;
        let mut map = HashMap::new();
        for (name, weather) in stations {
            weather.validate()?;
            map.insert(normalize_location(&name), weather);
        }
        Ok(Self { stations: map, fallback })
    }

    /// Three mock stations and a mild default for everywhere else.
    pub fn builtin() -> PlannerResult<Self> {
        let stations = [
            ("london", snapshot(15.0, 70.0, 3.0, 65.0, 12.0, 10.0, "Cloudy")),
            ("new york", snapshot(22.0, 60.0, 7.0, 25.0, 15.0, 15.0, "Partly Cloudy")),
            ("tokyo", snapshot(18.0, 65.0, 5.0, 40.0, 10.0, 12.0, "Partly Cloudy")),
        ];
        Self::new(
            stations.into_iter().map(|(name, w)| (name.to_string(), w)),
            snapshot(20.0, 60.0, 5.0, 30.0, 12.0, 10.0, "Partly Cloudy"),
        )
    }

    /// Serves `location`'s station for unknown locations instead of the
    /// built-in default. Lookups still report `mock-default` for them.
    pub fn with_default_location(mut self, location: &str) -> PlannerResult<Self> {
        let station = self
            .stations
            .get(&normalize_location(location))
            .ok_or_else(|| PlannerError::not_found("weather station", location))?;
        self.fallback = station.clone();
        Ok(self)
    }
}

impl WeatherProvider for StaticWeatherProvider {
    fn snapshot(&self, location: &str) -> WeatherLookup {
        match self.stations.get(&normalize_location(location)) {
            Some(weather) => WeatherLookup {
                weather: weather.clone(),
                source: WeatherSource::Mock,
            },
            None => WeatherLookup {
                weather: self.fallback.clone(),
                source: WeatherSource::MockDefault,
            },
        }
    }
}

fn snapshot(
    temperature: f64,
    humidity: f64,
    uv_index: f64,
    cloud_cover: f64,
    wind_speed: f64,
    visibility: f64,
    conditions: &str,
) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature,
        humidity,
        uv_index,
        cloud_cover,
        wind_speed,
        visibility,
        conditions: conditions.to_string(),
    }
}
