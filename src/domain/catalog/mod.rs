//! Static tool descriptors advertised through `tools/list`
//!
//! Each area module contributes the JSON-Schema input contract of its tools.
//! The schemas mirror what the upstream API accepts and are not stricter.

mod attributes;
mod carts;
mod categories;
mod channels;
mod inventory;
mod media;
mod partners;
mod pricing;
mod products;
mod system;
mod translations;

use rust_mcp_sdk::schema::Tool;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        properties: Value,
        required: &[&str],
    ) -> Self {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), properties);
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        Self {
            name,
            description,
            input_schema: Value::Object(schema),
        }
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.input_schema
            .get("properties")
            .and_then(Value::as_object)
    }

    pub fn required(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn to_tool(&self) -> Result<Tool, serde_json::Error> {
        serde_json::from_value(json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        }))
    }
}

/// Every descriptor, grouped by area in the order they are listed.
pub fn descriptors() -> Vec<ToolDescriptor> {
    [
        products::descriptors(),
        categories::descriptors(),
        pricing::descriptors(),
        carts::descriptors(),
        inventory::descriptors(),
        media::descriptors(),
        partners::descriptors(),
        channels::descriptors(),
        translations::descriptors(),
        attributes::descriptors(),
        system::descriptors(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn number(description: &str) -> Value {
    json!({ "type": "number", "description": description })
}

fn boolean(description: &str) -> Value {
    json!({ "type": "boolean", "description": description })
}

fn string_enum(values: &[&str], description: &str) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}

fn date_time(description: &str) -> Value {
    json!({ "type": "string", "format": "date-time", "description": description })
}

/// Adds `page` and `pageSize` with their defaults to a property map.
fn paged(mut properties: Value, page_size: u64) -> Value {
    if let Some(map) = properties.as_object_mut() {
        map.insert(
            "page".to_string(),
            json!({ "type": "number", "default": 1, "description": "Page number" }),
        );
        map.insert(
            "pageSize".to_string(),
            json!({ "type": "number", "default": page_size, "description": "Items per page" }),
        );
    }
    properties
}

/// Descriptor for a tool whose only input is an `id`.
fn by_id(name: &'static str, description: &'static str, id_description: &str) -> ToolDescriptor {
    ToolDescriptor::new(
        name,
        description,
        json!({ "id": string(id_description) }),
        &["id"],
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let descriptors = descriptors();
        let names: HashSet<_> = descriptors.iter().map(|tool| tool.name).collect();
        assert_eq!(names.len(), descriptors.len());
        assert_eq!(descriptors.len(), 102);
    }

    #[test]
    fn every_required_property_is_declared() {
        for tool in descriptors() {
            let properties = tool.properties().expect("properties object");
            for name in tool.required() {
                assert!(
                    properties.contains_key(name),
                    "{} requires undeclared property {name}",
                    tool.name
                );
            }
        }
    }

    #[test]
    fn every_descriptor_converts_to_sdk_tool() {
        for descriptor in descriptors() {
            let tool = descriptor.to_tool().expect("tool conversion");
            assert_eq!(tool.name, descriptor.name);
            assert!(!descriptor.description.is_empty());
        }
    }

    #[test]
    fn paged_adds_defaults() {
        let properties = paged(json!({}), 50);
        assert_eq!(properties["page"]["default"], 1);
        assert_eq!(properties["pageSize"]["default"], 50);
    }
}
