use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    Config,
    error::ProviderError,
    model::{CurrentConditions, Location, WeatherCategory, WeatherSnapshot},
    provider::normalize_temperature,
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    language: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key: config.api_key(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            language: config.language().to_string(),
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
        let url = format!("{}/weather", self.base_url);
        debug!(city, "requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            warn!(city, "OpenWeather does not know this city");
            return Err(ProviderError::NotFound);
        }

        if !status.is_success() {
            warn!(city, %status, "OpenWeather current request failed");
            return Err(ProviderError::Upstream(format!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::Upstream(format!("Failed to parse OpenWeather current JSON: {e}"))
        })?;

        parsed.into_snapshot()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: f64,
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, ProviderError> {
        let weather = self.weather.into_iter().next().ok_or_else(|| {
            ProviderError::Upstream("OpenWeather response contained no weather entry".into())
        })?;

        Ok(WeatherSnapshot {
            location: Location {
                name: self.name,
                country: self.sys.country,
                original_query: None,
            },
            current: CurrentConditions {
                temp: normalize_temperature(self.main.temp),
                feels_like: normalize_temperature(self.main.feels_like),
                humidity: self.main.humidity,
                pressure: self.main.pressure,
                visibility: self.visibility,
                wind_speed: self.wind.speed,
                wind_deg: self.wind.deg.unwrap_or(0.0),
                weather: WeatherCategory {
                    main: weather.main,
                    description: weather.description,
                    icon: weather.icon,
                },
                sunrise: self.sys.sunrise,
                sunset: self.sys.sunset,
            },
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
