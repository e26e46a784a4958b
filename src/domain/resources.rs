//! Model Context Protocol resource providers
//!
//! Exposes API documentation, live platform status and usage guides as
//! read-only JSON documents under `sun-ecommerce://` URIs.

use rust_mcp_sdk::schema::{
    ReadResourceContent, ReadResourceRequestParams, ReadResourceResult, Resource,
    TextResourceContents,
};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::domain::dispatcher::{platform_info, PLATFORM_VERSION};
use crate::mcp::rpc::{json_rpc_error, json_rpc_error_with_data, json_rpc_result};
use crate::AppState;

pub const API_DOCUMENTATION_URI: &str = "sun-ecommerce://api/documentation";
pub const SYSTEM_INFO_URI: &str = "sun-ecommerce://system/info";
pub const GETTING_STARTED_URI: &str = "sun-ecommerce://guides/getting-started";
pub const PRODUCT_MANAGEMENT_URI: &str = "sun-ecommerce://guides/product-management";
pub const PRICING_RULES_URI: &str = "sun-ecommerce://guides/pricing-rules";
pub const API_INTEGRATION_URI: &str = "sun-ecommerce://guides/api-integration";

const RESOURCES: &[(&str, &str, &str)] = &[
    (
        API_DOCUMENTATION_URI,
        "API Documentation",
        "Complete API documentation for Sun eCommerce Platform",
    ),
    (
        SYSTEM_INFO_URI,
        "System Information",
        "Current system status and capabilities",
    ),
    (
        GETTING_STARTED_URI,
        "Getting Started Guide",
        "Quick start guide for the Sun eCommerce Platform",
    ),
    (
        PRODUCT_MANAGEMENT_URI,
        "Product Management Guide",
        "Complete guide to managing products",
    ),
    (
        PRICING_RULES_URI,
        "Pricing Rules Guide",
        "Advanced pricing and discount management",
    ),
    (
        API_INTEGRATION_URI,
        "API Integration Guide",
        "Best practices for API integration",
    ),
];

pub fn build_resources_list() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|(uri, name, description)| Resource {
            annotations: None,
            description: Some(description.to_string()),
            icons: vec![],
            meta: None,
            mime_type: Some("application/json".to_string()),
            name: name.to_string(),
            size: None,
            title: None,
            uri: uri.to_string(),
        })
        .collect()
}

pub async fn handle_resources_read(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let resource_read: ReadResourceRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    let document = match resource_read.uri.as_str() {
        API_DOCUMENTATION_URI => api_documentation(state),
        SYSTEM_INFO_URI => system_info(state).await,
        GETTING_STARTED_URI => getting_started_guide(),
        PRODUCT_MANAGEMENT_URI => product_management_guide(),
        PRICING_RULES_URI => pricing_rules_guide(),
        API_INTEGRATION_URI => api_integration_guide(),
        _ => {
            return json_rpc_error_with_data(
                id,
                -32601,
                "Method not found",
                Some(json!({
                    "code": "resource_not_found",
                    "message": "unknown resource uri",
                    "details": {
                        "uri": resource_read.uri,
                    },
                })),
            )
        }
    };

    let result = serde_json::to_value(ReadResourceResult {
        contents: vec![ReadResourceContent::from(TextResourceContents {
            meta: None,
            mime_type: Some("application/json".to_string()),
            text: serde_json::to_string_pretty(&document).expect("resource document serialization"),
            uri: resource_read.uri,
        })],
        meta: None,
    })
    .expect("read resource result serialization");

    json_rpc_result(id, result)
}

/// Endpoint map keyed by tool name, rendered as `METHOD /api/<version>/<path>`.
fn api_documentation(state: &AppState) -> Value {
    let config = state.dispatcher.client().config();
    let prefix = format!("/api/{}", config.api_version);

    let mut endpoints = Map::new();
    for tool in state.dispatcher.registry().iter() {
        let routes = tool
            .route
            .endpoints()
            .into_iter()
            .map(|endpoint| format!("{} {prefix}{}", endpoint.method, endpoint.template))
            .collect::<Vec<_>>();
        let entry = match routes.as_slice() {
            [single] => json!(single),
            _ => json!(routes),
        };
        endpoints.insert(tool.descriptor.name.to_string(), entry);
    }

    json!({
        "title": "Sun eCommerce Platform API Documentation",
        "version": PLATFORM_VERSION,
        "description": "Complete API documentation for the Sun eCommerce Platform",
        "baseUrl": config.base_url(),
        "endpoints": endpoints,
    })
}

async fn system_info(state: &AppState) -> Value {
    let client = state.dispatcher.client();
    match client.health_check().await {
        Ok(health) => platform_info(client.config(), Some(&health)),
        Err(err) => {
            warn!(error = %err, "health check failed while reading system info resource");
            let mut info = platform_info(client.config(), None);
            if let Some(object) = info.as_object_mut() {
                object.insert("error".to_string(), json!(err.to_string()));
            }
            info
        }
    }
}

fn getting_started_guide() -> Value {
    json!({
        "title": "Getting Started with Sun eCommerce Platform",
        "sections": [
            {
                "title": "Quick Start",
                "content": "Learn how to set up and use the Sun eCommerce Platform APIs",
                "steps": [
                    "Configure your API endpoint and authentication",
                    "Create your first product category",
                    "Add products to your catalog",
                    "Set up pricing rules",
                    "Configure inventory management"
                ]
            },
            {
                "title": "Authentication",
                "content": "How to authenticate with the API",
                "example": "Bearer token authentication required for most endpoints"
            },
            {
                "title": "Rate Limiting",
                "content": "API rate limits and best practices",
                "limits": "1000 requests per hour per API key"
            }
        ]
    })
}

fn product_management_guide() -> Value {
    json!({
        "title": "Product Management Guide",
        "description": "Complete guide to managing products in the Sun eCommerce Platform",
        "sections": [
            {
                "title": "Creating Products",
                "content": "How to create and configure products",
                "examples": [
                    "Simple products",
                    "Configurable products with variants",
                    "Bundle products"
                ]
            },
            {
                "title": "Product Attributes",
                "content": "Managing product attributes and values",
                "features": [
                    "Custom attributes",
                    "Attribute groups",
                    "Multi-language attribute values"
                ]
            },
            {
                "title": "Categories",
                "content": "Organizing products with categories",
                "features": [
                    "Hierarchical category structure",
                    "Category-specific attributes",
                    "SEO-friendly URLs"
                ]
            }
        ]
    })
}

fn pricing_rules_guide() -> Value {
    json!({
        "title": "Pricing Rules Guide",
        "description": "Advanced pricing and discount management",
        "sections": [
            {
                "title": "Rule Types",
                "content": "Different types of pricing rules available",
                "types": [
                    "Percentage discounts",
                    "Fixed amount discounts",
                    "Buy X Get Y offers",
                    "Tier pricing",
                    "Bulk discounts"
                ]
            },
            {
                "title": "Conditions",
                "content": "Setting up rule conditions",
                "examples": [
                    "Minimum quantity",
                    "Customer groups",
                    "Date ranges",
                    "Product categories"
                ]
            },
            {
                "title": "Priority and Stacking",
                "content": "How rules are applied and combined"
            }
        ]
    })
}

fn api_integration_guide() -> Value {
    json!({
        "title": "API Integration Guide",
        "description": "Best practices for integrating with the Sun eCommerce Platform",
        "sections": [
            {
                "title": "SDKs and Libraries",
                "content": "Available SDKs for different programming languages"
            },
            {
                "title": "Webhooks",
                "content": "Real-time notifications for events"
            },
            {
                "title": "Error Handling",
                "content": "How to handle API errors gracefully"
            },
            {
                "title": "Performance Optimization",
                "content": "Tips for optimal API usage"
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_six_json_resources() {
        let resources = build_resources_list();

        assert_eq!(resources.len(), 6);
        assert!(resources
            .iter()
            .all(|resource| resource.mime_type.as_deref() == Some("application/json")));
        assert!(resources.iter().any(|resource| resource.uri == SYSTEM_INFO_URI));
    }

    #[test]
    fn guides_have_titles_and_sections() {
        for guide in [
            getting_started_guide(),
            product_management_guide(),
            pricing_rules_guide(),
            api_integration_guide(),
        ] {
            assert!(guide["title"].is_string());
            assert!(!guide["sections"].as_array().expect("sections").is_empty());
        }
    }
}
