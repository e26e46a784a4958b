use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Uniform result of every tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

impl ToolResult {
    /// Wraps a decoded upstream body. Bodies shaped `{"data": .., "pagination": ..}`
    /// are unwrapped; anything else becomes `data` as is.
    pub fn from_response(body: Value, message: &str) -> Self {
        let (data, pagination) = match body {
            Value::Object(mut object) if object.contains_key("data") => {
                let data = object.remove("data");
                let pagination = object.remove("pagination").filter(|value| !value.is_null());
                (data, pagination)
            }
            other => (Some(other), None),
        };

        Self {
            success: true,
            data,
            message: Some(message.to_string()),
            error: None,
            pagination,
            next_steps: Vec::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            pagination: None,
            next_steps: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_next_steps(mut self, next_steps: &[&str]) -> Self {
        self.next_steps = next_steps.iter().map(|step| step.to_string()).collect();
        self
    }

    /// Adds `key` to the `data` object. A non-object `data` is first wrapped
    /// under `wrap_key`.
    pub fn insert_data_field(&mut self, wrap_key: &str, key: &str, value: Value) {
        let mut object = match self.data.take() {
            Some(Value::Object(object)) => object,
            Some(Value::Null) | None => Map::new(),
            Some(other) => Map::from_iter([(wrap_key.to_string(), other)]),
        };
        object.insert(key.to_string(), value);
        self.data = Some(Value::Object(object));
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("tool result serialization")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_data_and_pagination() {
        let result = ToolResult::from_response(
            json!({
                "data": [{"id": "p-1"}],
                "pagination": {"page": 1, "total": 1}
            }),
            "Products retrieved successfully",
        );

        assert!(result.success);
        assert_eq!(result.data, Some(json!([{"id": "p-1"}])));
        assert_eq!(result.pagination, Some(json!({"page": 1, "total": 1})));
    }

    #[test]
    fn keeps_plain_bodies_whole() {
        let result = ToolResult::from_response(json!({"id": "p-1", "name": "Widget"}), "ok");

        assert_eq!(result.data, Some(json!({"id": "p-1", "name": "Widget"})));
        assert!(result.pagination.is_none());
    }

    #[test]
    fn failure_serializes_without_empty_fields() {
        let value = ToolResult::failure("Unknown tool: nope").to_value();
        assert_eq!(value, json!({"success": false, "error": "Unknown tool: nope"}));
    }

    #[test]
    fn next_steps_serialize_in_camel_case() {
        let value = ToolResult::from_response(json!({"id": "c-1"}), "Cart created successfully")
            .with_next_steps(&["Add items using add_cart_item"])
            .to_value();
        assert_eq!(value["nextSteps"], json!(["Add items using add_cart_item"]));
    }

    #[test]
    fn insert_data_field_wraps_scalars() {
        let mut result = ToolResult::from_response(json!("healthy"), "ok");
        result.insert_data_field("status", "timestamp", json!("now"));
        assert_eq!(
            result.data,
            Some(json!({"status": "healthy", "timestamp": "now"}))
        );
    }
}
