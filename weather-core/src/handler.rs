//! Request orchestration: validate, resolve, fetch, shape.
//!
//! [`WeatherService::handle`] always yields either a snapshot or one of the
//! three [`ErrorKind`](crate::ErrorKind)s. Provider panics are caught and
//! reported as upstream failures.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, warn};

use crate::{
    error::{ErrorResult, ProviderError},
    model::{WeatherQuery, WeatherSnapshot},
    provider::WeatherProvider,
};

#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, raw_city: &str) -> Result<WeatherSnapshot, ErrorResult> {
        if raw_city.trim().is_empty() {
            return Err(ErrorResult::validation());
        }

        let query = WeatherQuery::new(raw_city);
        debug!(original = %query.original, resolved = %query.resolved, "resolved city");

        let outcome = AssertUnwindSafe(self.provider.current_weather(&query.resolved))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(snapshot)) => Ok(snapshot.with_original_query(query.original)),
            Ok(Err(ProviderError::NotFound)) => Err(ErrorResult::not_found(&query.original)),
            Ok(Err(ProviderError::Upstream(reason))) => {
                warn!(city = %query.resolved, %reason, "weather lookup failed");
                Err(ErrorResult::upstream())
            }
            Err(_) => {
                error!(city = %query.resolved, "weather provider panicked");
                Err(ErrorResult::upstream())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{CurrentConditions, Location, WeatherCategory};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug)]
    enum Behavior {
        Succeed,
        NotFound,
        Upstream,
        Panic,
    }

    #[derive(Debug)]
    struct MockProvider {
        behavior: Behavior,
        calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for MockProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ProviderError> {
            self.calls.lock().unwrap().push(city.to_string());
            match self.behavior {
                Behavior::Succeed => Ok(snapshot(city)),
                Behavior::NotFound => Err(ProviderError::NotFound),
                Behavior::Upstream => Err(ProviderError::Upstream("HTTP 401".into())),
                Behavior::Panic => panic!("provider exploded"),
            }
        }
    }

    fn snapshot(name: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: name.to_string(),
                country: "KR".into(),
                original_query: None,
            },
            current: CurrentConditions {
                temp: 22.35,
                feels_like: 21.0,
                humidity: 40.0,
                pressure: 1013.0,
                visibility: 10000.0,
                wind_speed: 3.0,
                wind_deg: 0.0,
                weather: WeatherCategory {
                    main: "Clear".into(),
                    description: "맑음".into(),
                    icon: "01d".into(),
                },
                sunrise: 1_700_000_000,
                sunset: 1_700_040_000,
            },
        }
    }

    #[tokio::test]
    async fn korean_query_is_translated_and_original_kept() {
        let mock = MockProvider::new(Behavior::Succeed);
        let service = WeatherService::new(mock.clone());

        let snap = service.handle("서울").await.unwrap();

        assert_eq!(mock.calls(), vec!["Seoul"]);
        assert_eq!(snap.location.name, "Seoul");
        assert_eq!(snap.location.original_query.as_deref(), Some("서울"));
    }

    #[tokio::test]
    async fn blank_query_never_reaches_provider() {
        let mock = MockProvider::new(Behavior::Succeed);
        let service = WeatherService::new(mock.clone());

        for raw in ["", "   ", "\t\n"] {
            let err = service.handle(raw).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::ValidationFailure);
        }
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn not_found_mentions_original_query() {
        let mock = MockProvider::new(Behavior::NotFound);
        let service = WeatherService::new(mock.clone());

        let err = service.handle("Nonexistentville").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("Nonexistentville"));

        let err = service.handle("서울").await.unwrap_err();
        assert!(err.message.contains("서울"));
        assert!(!err.message.contains("Seoul"));
    }

    #[tokio::test]
    async fn upstream_failure_is_generic() {
        let service = WeatherService::new(MockProvider::new(Behavior::Upstream));

        let err = service.handle("London").await.unwrap_err();
        assert_eq!(err, ErrorResult::upstream());
        assert!(!err.message.contains("401"));
    }

    #[tokio::test]
    async fn provider_panic_becomes_upstream_failure() {
        let service = WeatherService::new(MockProvider::new(Behavior::Panic));

        let err = service.handle("London").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamFailure);
    }
}
