//! HTTP query interface for the weather app.
//!
//! `GET /api/weather?city=..` answers with a weather snapshot or
//! `{ "error": ".." }` and a 400 / 404 / 500 status.
//! `GET /api/suggest?q=..` lists matching Korean city names.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use weather_core::{ErrorResult, WeatherService, resolver};

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error rendered as `{ "error": .. }` with the matching status.
pub struct ApiError(ErrorResult);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorResponse {
                error: self.0.message,
            }),
        )
            .into_response()
    }
}

impl From<ErrorResult> for ApiError {
    fn from(err: ErrorResult) -> Self {
        Self(err)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: WeatherService,
}

pub fn router(service: WeatherService) -> Router {
    Router::new()
        .route("/api/weather", get(get_weather))
        .route("/api/suggest", get(get_suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { service })
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Response, ApiError> {
    let city = params.city.unwrap_or_default();
    info!(city = %city, "weather lookup");

    let snapshot = state.service.handle(&city).await?;
    Ok(Json(snapshot).into_response())
}

async fn get_suggestions(Query(params): Query<SuggestParams>) -> Json<SuggestResponse> {
    let suggestions = resolver::suggest(&params.q)
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(SuggestResponse { suggestions })
}
