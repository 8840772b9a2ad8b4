use crate::{Config, WeatherSnapshot, error::ProviderError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions for an already-resolved city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// One best-effort attempt. No retries, no caching.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ProviderError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::from_config(config)?;
    Ok(Box::new(provider))
}

/// Celsius from a reading that may be Kelvin.
///
/// Anything above 200 is taken as Kelvin. Safe only for ambient air
/// temperatures, which never reach 200°C.
pub fn normalize_temperature(value: f64) -> f64 {
    const KELVIN_THRESHOLD: f64 = 200.0;
    const KELVIN_OFFSET: f64 = 273.15;

    if value > KELVIN_THRESHOLD {
        value - KELVIN_OFFSET
    } else {
        value
    }
}
