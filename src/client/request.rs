use std::fmt;

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One logical call against the upstream API. `path` is relative to the
/// configured API root and already has its placeholders substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn with_query(mut self, params: &Map<String, Value>) -> Self {
        self.query.extend(query_pairs(params));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful (2xx) response from one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Flattens tool arguments into query-string pairs.
///
/// Scalars become `key=value`, arrays repeat the key once per element, nested
/// objects are sent as compact JSON text and nulls are dropped.
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = query_value(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = query_value(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Decodes a response body. Empty bodies become `null` and non-JSON text is
/// kept as a JSON string.
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_pairs_flatten_scalars_arrays_and_objects() {
        let params = json!({
            "page": 2,
            "active": true,
            "search": "red shoes",
            "tags": ["sale", "new"],
            "filter": {"min": 1},
            "skipped": null
        });

        let mut pairs = query_pairs(params.as_object().expect("object"));
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("filter".to_string(), "{\"min\":1}".to_string()),
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "red shoes".to_string()),
                ("tags".to_string(), "new".to_string()),
                ("tags".to_string(), "sale".to_string()),
            ]
        );
    }

    #[test]
    fn decode_body_handles_empty_json_and_text() {
        assert_eq!(decode_body(b""), Value::Null);
        assert_eq!(decode_body(b"  \n"), Value::Null);
        assert_eq!(decode_body(br#"{"id":"1"}"#), json!({"id": "1"}));
        assert_eq!(decode_body(b"OK"), json!("OK"));
    }

    #[test]
    fn builder_collects_query_and_body() {
        let request = ApiRequest::new(HttpMethod::Post, "/carts")
            .with_body(json!({"customerId": "c-1"}));

        assert_eq!(request.method.to_string(), "POST");
        assert_eq!(request.body, Some(json!({"customerId": "c-1"})));
        assert!(request.query.is_empty());
    }
}
