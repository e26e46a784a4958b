use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Url,
};

use crate::config::ClientConfig;

use super::{
    error::{upstream_message, ApiError},
    request::{decode_body, ApiRequest, ApiResponse},
};

/// Performs exactly one attempt of an [`ApiRequest`]. Retrying is the
/// caller's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

pub struct ReqwestTransport {
    http: Client,
    api_root: String,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|err| ApiError::ClientBuild(err.to_string()))?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.api_root, request.path))
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn network_error(request: &ApiRequest, err: reqwest::Error) -> ApiError {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };

        ApiError::Network {
            method: request.method,
            path: request.path.clone(),
            message,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(request)?;
        let mut builder = self.http.request(request.method.into(), url);

        if let Some(token) = self.auth_token.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| Self::network_error(request, err))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Self::network_error(request, err))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                method: request.method,
                path: request.path.clone(),
                status: status.as_u16(),
                message: upstream_message(&bytes, status.canonical_reason()),
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            body: decode_body(&bytes),
        })
    }
}
