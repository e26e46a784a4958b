use serde_json::Value;
use thiserror::Error;

use super::request::HttpMethod;

/// Failure of one logical upstream call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {path} failed: {message}")]
    Network {
        method: HttpMethod,
        path: String,
        message: String,
    },
    #[error("{method} {path} returned status {status}: {message}")]
    Status {
        method: HttpMethod,
        path: String,
        status: u16,
        message: String,
    },
    #[error("missing path parameter '{name}' for {template}")]
    MissingPathParam { template: &'static str, name: String },
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Errors raised before any bytes reach the network. Retrying them cannot
    /// change the outcome.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPathParam { .. } | Self::InvalidUrl(_) | Self::ClientBuild(_)
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Picks the most useful human-readable message out of an error response body.
///
/// Upstream error bodies are usually `{"message": "..."}` or
/// `{"error": "..."}`; anything else is passed through as text.
pub fn upstream_message(body: &[u8], reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }

    reason.unwrap_or("no response body").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_prefers_json_message_field() {
        let body = br#"{"statusCode":404,"message":"Product not found"}"#;
        assert_eq!(upstream_message(body, Some("Not Found")), "Product not found");
    }

    #[test]
    fn upstream_message_falls_back_to_error_field_then_text() {
        assert_eq!(upstream_message(br#"{"error":"Conflict"}"#, None), "Conflict");
        assert_eq!(upstream_message(b"gateway down", None), "gateway down");
        assert_eq!(upstream_message(b"", Some("Bad Gateway")), "Bad Gateway");
    }

    #[test]
    fn only_pre_network_errors_are_caller_errors() {
        let missing = ApiError::MissingPathParam {
            template: "/products/{id}",
            name: "id".to_string(),
        };
        let status = ApiError::Status {
            method: HttpMethod::Get,
            path: "/products/1".to_string(),
            status: 500,
            message: "boom".to_string(),
        };

        assert!(missing.is_caller_error());
        assert!(!status.is_caller_error());
        assert_eq!(status.status(), Some(500));
        assert_eq!(
            status.to_string(),
            "GET /products/1 returned status 500: boom"
        );
    }
}
