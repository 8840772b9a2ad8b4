use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resolver;

/// One resolution attempt: what the user typed and what we send upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub original: String,
    pub resolved: String,
}

impl WeatherQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            resolved: resolver::resolve(raw),
        }
    }
}

/// Normalized current conditions for a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// The untranslated query, kept for display next to the canonical name.
    #[serde(
        rename = "originalQuery",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius.
    pub temp: f64,
    /// Degrees Celsius.
    pub feels_like: f64,
    /// Percent.
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// Meters.
    pub visibility: f64,
    /// m/s.
    pub wind_speed: f64,
    /// Meteorological degrees, 0 when the provider omits it.
    pub wind_deg: f64,
    pub weather: WeatherCategory,
    /// Unix seconds.
    pub sunrise: i64,
    /// Unix seconds.
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCategory {
    /// Machine-readable group, e.g. "Clouds".
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl WeatherSnapshot {
    /// Attach the query the user actually typed.
    pub fn with_original_query(mut self, query: impl Into<String>) -> Self {
        self.location.original_query = Some(query.into());
        self
    }

    pub fn icon_url(&self) -> String {
        format!(
            "https://openweathermap.org/img/wn/{}@2x.png",
            self.current.weather.icon
        )
    }

    pub fn sunrise_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.current.sunrise, 0)
    }

    pub fn sunset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.current.sunset, 0)
    }
}
