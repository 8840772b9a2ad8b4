//! Core library for the weather app.
//!
//! This crate defines:
//! - Korean to English city name resolution and autocomplete
//! - The OpenWeather adapter and its status/unit normalization
//! - The request handler that turns a raw query into a snapshot or a user-facing error
//! - Configuration & credentials handling
//! - Render state for search UIs
//!
//! It is used by `weather-cli` and `weather-web`.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod view;

pub use config::Config;
pub use error::{ErrorKind, ErrorResult, ProviderError};
pub use handler::WeatherService;
pub use model::{CurrentConditions, Location, WeatherCategory, WeatherQuery, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use view::{SearchSession, SearchTicket, ViewState};
