use std::{env, net::SocketAddr, time::Duration};

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub transport: TransportMode,
}

/// Settings for the upstream REST client, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    pub api_version: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub auth_token: Option<String>,
    pub enable_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
    Stdio,
    Http(HttpConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub api_token: String,
    pub bind_addr: String,
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SUN_ECOMMERCE_API_URL must be an absolute http(s) URL")]
    InvalidBaseUrl,
    #[error("SUN_ECOMMERCE_API_VERSION must not be empty or contain '/'")]
    InvalidApiVersion,
    #[error("SUN_ECOMMERCE_API_TIMEOUT must be a positive number of milliseconds")]
    InvalidTimeout,
    #[error("SUN_ECOMMERCE_API_RETRIES must be an integer >= 1")]
    InvalidRetries,
    #[error("MCP_TRANSPORT must be one of: stdio, http")]
    InvalidTransport,
    #[error("MCP_API_TOKEN is required and must not be empty when MCP_TRANSPORT=http")]
    MissingApiToken,
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            client: ClientConfig::from_lookup(&lookup)?,
            transport: TransportMode::from_lookup(&lookup)?,
        })
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(lookup("SUN_ECOMMERCE_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .ok_or(ConfigError::InvalidBaseUrl)?;

        let api_version = non_empty(lookup("SUN_ECOMMERCE_API_VERSION"))
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        if api_version.contains('/') {
            return Err(ConfigError::InvalidApiVersion);
        }

        let timeout_ms = non_empty(lookup("SUN_ECOMMERCE_API_TIMEOUT"))
            .map(|value| {
                value
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or(ConfigError::InvalidTimeout)
            })
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let max_retries = non_empty(lookup("SUN_ECOMMERCE_API_RETRIES"))
            .map(|value| {
                value
                    .parse::<u32>()
                    .ok()
                    .filter(|retries| *retries >= 1)
                    .ok_or(ConfigError::InvalidRetries)
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAX_RETRIES);

        let auth_token = non_empty(lookup("SUN_ECOMMERCE_API_TOKEN"));

        let enable_logging = lookup("SUN_ECOMMERCE_ENABLE_LOGGING")
            .map(|value| !value.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            base_url,
            api_version,
            timeout: Duration::from_millis(timeout_ms),
            max_retries,
            auth_token,
            enable_logging,
        })
    }

    /// Upstream origin as configured, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Root every endpoint path is appended to: `{base_url}/api/{api_version}`.
    pub fn api_root(&self) -> String {
        format!("{}/api/{}", self.base_url(), self.api_version)
    }
}

impl TransportMode {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = non_empty(lookup("MCP_TRANSPORT"))
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_else(|| "stdio".to_string());

        match mode.as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http(HttpConfig::from_lookup(lookup)?)),
            _ => Err(ConfigError::InvalidTransport),
        }
    }
}

impl HttpConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token =
            non_empty(lookup("MCP_API_TOKEN")).ok_or(ConfigError::MissingApiToken)?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string());
        let bind_port = lookup("BIND_PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8080);

        let config = Self {
            api_token,
            bind_addr,
            bind_port,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
