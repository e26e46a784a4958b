//! Retrying client for the Sun eCommerce REST API
//!
//! Every tool call funnels through [`ApiClient::request`], which drives a
//! [`HttpTransport`] attempt by attempt with exponential backoff in between.

pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;

use std::{sync::Arc, time::Duration};

use serde_json::Value;
use tracing::{info, warn};

use crate::config::ClientConfig;

pub use endpoints::{Endpoint, PathParams, Payload};
pub use error::ApiError;
pub use request::{ApiRequest, ApiResponse, HttpMethod};
pub use transport::{HttpTransport, ReqwestTransport};

const BACKOFF_BASE_MS: u64 = 1_000;

#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `request`, retrying failed attempts up to `max_retries` attempts
    /// in total. Returns the decoded body of the first successful attempt or
    /// the error of the last one.
    pub async fn request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempt = 1;

        loop {
            if self.config.enable_logging {
                info!(
                    method = %request.method,
                    path = %request.path,
                    attempt,
                    "api request"
                );
            }

            match self.transport.send(&request).await {
                Ok(response) => {
                    if self.config.enable_logging {
                        info!(
                            status = response.status,
                            path = %request.path,
                            "api response"
                        );
                    }
                    return Ok(response.body);
                }
                Err(err) => {
                    if self.config.enable_logging {
                        warn!(
                            method = %request.method,
                            path = %request.path,
                            attempt,
                            error = %err,
                            "api request failed"
                        );
                    }

                    if err.is_caller_error() || attempt >= max_attempts {
                        return Err(err);
                    }

                    let delay = backoff_delay(attempt);
                    if self.config.enable_logging {
                        warn!(
                            path = %request.path,
                            delay_ms = delay.as_millis() as u64,
                            next_attempt = attempt + 1,
                            max_attempts,
                            "retrying api request"
                        );
                    }
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    pub async fn call_endpoint(
        &self,
        endpoint: &Endpoint,
        params: &PathParams,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        let request = endpoint.request(params, payload)?;
        self.request(request).await
    }

    pub async fn health_check(&self) -> Result<Value, ApiError> {
        self.call_endpoint(&endpoints::HEALTH, &PathParams::new(), Payload::None)
            .await
    }
}

/// Delay inserted after failed attempt `attempt` (1-based): 1s, 2s, 4s, ...
pub fn backoff_delay(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(20);
    Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(1u64 << exponent))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;

    /// Scripted transport: pops one outcome per attempt and records the
    /// requests and the (virtual) instant each attempt started.
    pub struct ScriptedTransport {
        outcomes: Mutex<VecDeque<Result<Value, u16>>>,
        fallback: Result<Value, u16>,
        pub calls: Mutex<Vec<(ApiRequest, Instant)>>,
    }

    impl ScriptedTransport {
        pub fn new(outcomes: Vec<Result<Value, u16>>, fallback: Result<Value, u16>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                fallback,
                calls: Mutex::new(Vec::new()),
            })
        }

        pub fn always(outcome: Result<Value, u16>) -> Arc<Self> {
            Self::new(Vec::new(), outcome)
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().expect("calls lock").len()
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.calls
                .lock()
                .expect("calls lock")
                .iter()
                .map(|(request, _)| request.clone())
                .collect()
        }

        pub fn started_at(&self) -> Vec<Instant> {
            self.calls
                .lock()
                .expect("calls lock")
                .iter()
                .map(|(_, at)| *at)
                .collect()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
            self.calls
                .lock()
                .expect("calls lock")
                .push((request.clone(), Instant::now()));

            let outcome = self
                .outcomes
                .lock()
                .expect("outcomes lock")
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone());

            match outcome {
                Ok(body) => Ok(ApiResponse { status: 200, body }),
                Err(status) => Err(ApiError::Status {
                    method: request.method,
                    path: request.path.clone(),
                    status,
                    message: "upstream failure".to_string(),
                }),
            }
        }
    }

    pub fn test_config(max_retries: u32) -> ClientConfig {
        let mut config = ClientConfig::from_lookup(&|_: &str| None).expect("default config");
        config.max_retries = max_retries;
        config.enable_logging = false;
        config
    }

    pub fn client_with(max_retries: u32, transport: Arc<ScriptedTransport>) -> ApiClient {
        ApiClient::with_transport(test_config(max_retries), transport)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::time::Instant;

    use super::testing::{client_with, ScriptedTransport};
    use super::*;

    #[test]
    fn backoff_doubles_from_one_second() {
        assert_eq!(backoff_delay(1), Duration::from_millis(1_000));
        assert_eq!(backoff_delay(2), Duration::from_millis(2_000));
        assert_eq!(backoff_delay(3), Duration::from_millis(4_000));
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_failure_makes_exactly_max_attempts() {
        let transport = ScriptedTransport::always(Err(503));
        let client = client_with(4, transport.clone());
        let started = Instant::now();

        let err = client
            .request(ApiRequest::get("/products"))
            .await
            .expect_err("every attempt fails");

        assert_eq!(err.status(), Some(503));
        assert_eq!(transport.call_count(), 4);
        // 1s + 2s + 4s of backoff between four attempts.
        assert!(started.elapsed() >= Duration::from_millis(7_000));
        assert!(started.elapsed() < Duration::from_millis(7_100));
    }

    #[tokio::test(start_paused = true)]
    async fn success_on_attempt_j_stops_retrying() {
        for j in 1..=3usize {
            let mut outcomes = vec![Err(500); j - 1];
            outcomes.push(Ok(json!({"attempt": j})));
            let transport = ScriptedTransport::new(outcomes, Err(500));
            let client = client_with(5, transport.clone());

            let body = client
                .request(ApiRequest::get("/health"))
                .await
                .expect("attempt j succeeds");

            assert_eq!(body, json!({"attempt": j}));
            assert_eq!(transport.call_count(), j);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_one_then_two_seconds_before_third_attempt() {
        let transport = ScriptedTransport::new(
            vec![Err(502), Err(502), Ok(json!({"ok": true}))],
            Err(500),
        );
        let client = client_with(3, transport.clone());

        let body = client
            .request(ApiRequest::get("/health"))
            .await
            .expect("third attempt succeeds");
        assert_eq!(body, json!({"ok": true}));

        let started = transport.started_at();
        assert_eq!(started.len(), 3);
        let first_gap = started[1] - started[0];
        let second_gap = started[2] - started[1];
        assert!(
            first_gap >= Duration::from_millis(1_000) && first_gap < Duration::from_millis(1_050)
        );
        assert!(
            second_gap >= Duration::from_millis(2_000) && second_gap < Duration::from_millis(2_050)
        );
    }

    #[tokio::test]
    async fn single_attempt_when_retries_is_one() {
        let transport = ScriptedTransport::always(Err(500));
        let client = client_with(1, transport.clone());

        client
            .request(ApiRequest::get("/products/1"))
            .await
            .expect_err("only attempt fails");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_path_param_never_reaches_transport() {
        let transport = ScriptedTransport::always(Ok(json!({})));
        let client = client_with(3, transport.clone());

        let err = client
            .call_endpoint(&endpoints::GET_PRODUCT, &PathParams::new(), Payload::None)
            .await
            .expect_err("id is missing");

        assert!(matches!(err, ApiError::MissingPathParam { .. }));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn call_endpoint_builds_path_and_query() {
        let transport = ScriptedTransport::always(Ok(json!({"data": []})));
        let client = client_with(1, transport.clone());
        let params = PathParams::from([("cartId".to_string(), "c-7".to_string())]);
        let query = json!({"page": 1}).as_object().cloned().unwrap_or_default();

        client
            .call_endpoint(&endpoints::GET_CART_ITEMS, &params, Payload::Query(query))
            .await
            .expect("call succeeds");

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/carts/c-7/items");
        assert_eq!(
            requests[0].query,
            vec![("page".to_string(), "1".to_string())]
        );
    }
}
