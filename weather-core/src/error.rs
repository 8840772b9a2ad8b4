use serde::Serialize;
use thiserror::Error;

const MSG_CITY_REQUIRED: &str = "도시 이름이 필요합니다";
const MSG_FETCH_FAILED: &str = "날씨 정보를 가져오는 중 오류가 발생했습니다";

/// Outcome of a failed provider call, as classified by the adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered 404 for the requested place.
    #[error("city not found by provider")]
    NotFound,

    /// Transport failure, non-404 error status or malformed payload.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Upstream(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationFailure,
    NotFound,
    UpstreamFailure,
}

impl ErrorKind {
    /// HTTP-like status for the inbound interface.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::ValidationFailure => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::UpstreamFailure => 500,
        }
    }
}

/// User-facing failure returned by the request handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorResult {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorResult {
    pub fn validation() -> Self {
        Self {
            kind: ErrorKind::ValidationFailure,
            message: MSG_CITY_REQUIRED.to_string(),
        }
    }

    /// `original` is the query as the user typed it, not the resolved name.
    pub fn not_found(original: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("\"{original}\" 도시를 찾을 수 없습니다"),
        }
    }

    pub fn upstream() -> Self {
        Self {
            kind: ErrorKind::UpstreamFailure,
            message: MSG_FETCH_FAILED.to_string(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}
