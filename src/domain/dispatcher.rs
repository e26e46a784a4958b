//! Tool invocation: registry lookup, argument preparation, upstream call and
//! envelope construction.
//!
//! [`ToolDispatcher::call`] never fails. Every outcome, including unknown tools
//! and upstream errors, is reported as a [`ToolResult`].

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::{
    arguments::{flag, prepare, split_path_args},
    envelope::ToolResult,
    registry::{RegisteredTool, ToolRegistry},
    routes::{Handler, PayloadShape},
};
use crate::client::{endpoints, ApiClient, ApiError, PathParams, Payload};
use crate::config::ClientConfig;

pub const PLATFORM_NAME: &str = "Sun eCommerce Platform";
pub const PLATFORM_VERSION: &str = "1.0.0";

pub const CAPABILITIES: &[&str] = &[
    "Product Management",
    "Category Management",
    "Pricing Rules",
    "Cart Management",
    "Inventory Management",
    "Media Management",
    "Partner Management",
    "Sales Channel Management",
    "Multi-language Support",
    "Product Attributes",
];

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct ToolDispatcher {
    client: ApiClient,
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    pub fn new(client: ApiClient, registry: Arc<ToolRegistry>) -> Self {
        Self { client, registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn call(&self, name: &str, arguments: Map<String, Value>) -> ToolResult {
        let Some(tool) = self.registry.get(name) else {
            debug!(tool = %name, "unknown tool requested");
            return ToolResult::failure(DispatchError::UnknownTool(name.to_string()).to_string());
        };

        match self.execute(tool, arguments).await {
            Ok(result) => result,
            Err(err) => {
                warn!(tool = %name, error = %err, "tool call failed");
                let message = err.to_string();
                if message.trim().is_empty() {
                    ToolResult::failure(format!("Failed to execute {name}"))
                } else {
                    ToolResult::failure(message)
                }
            }
        }
    }

    async fn execute(
        &self,
        tool: &RegisteredTool,
        arguments: Map<String, Value>,
    ) -> Result<ToolResult, DispatchError> {
        let arguments = prepare(&tool.descriptor, arguments)?;
        let route = &tool.route;

        let result = match route.handler {
            Handler::Endpoint { endpoint, payload } => {
                let (params, rest) = split_path_args(&endpoint, arguments)?;
                let payload = match payload {
                    PayloadShape::Ignore => Payload::None,
                    PayloadShape::Query => Payload::Query(rest),
                    PayloadShape::Body => Payload::Body(Value::Object(rest)),
                };
                let body = self.client.call_endpoint(&endpoint, &params, payload).await?;
                ToolResult::from_response(body, route.message)
            }
            Handler::CategoryListing => self.list_categories(arguments, route.message).await?,
            Handler::HealthCheck => {
                let body = self.client.health_check().await?;
                let mut result = ToolResult::from_response(body, route.message);
                result.insert_data_field("status", "timestamp", json!(now_rfc3339()));
                result
            }
            Handler::SystemInfo => return Ok(self.system_info(route.message).await),
        };

        Ok(result.with_next_steps(route.next_steps))
    }

    async fn list_categories(
        &self,
        mut arguments: Map<String, Value>,
        message: &str,
    ) -> Result<ToolResult, DispatchError> {
        if flag(&arguments, "tree") {
            let body = self
                .client
                .call_endpoint(&endpoints::GET_CATEGORY_TREE, &PathParams::new(), Payload::None)
                .await?;
            return Ok(ToolResult::from_response(
                body,
                "Category tree retrieved successfully",
            ));
        }

        arguments.remove("tree");
        let body = self
            .client
            .call_endpoint(
                &endpoints::LIST_CATEGORIES,
                &PathParams::new(),
                Payload::Query(arguments),
            )
            .await?;
        Ok(ToolResult::from_response(body, message))
    }

    /// Static platform facts merged with the live health status. A failing
    /// health call still yields platform data, marked `status: "error"`.
    async fn system_info(&self, message: &str) -> ToolResult {
        match self.client.health_check().await {
            Ok(health) => {
                let mut result = ToolResult::from_response(Value::Null, message);
                result.data = Some(platform_info(self.client.config(), Some(&health)));
                result
            }
            Err(err) => {
                warn!(error = %err, "health check failed while collecting system info");
                let mut result = ToolResult::failure(err.to_string());
                result.message = Some("Failed to retrieve system information".to_string());
                result.with_data(platform_info(self.client.config(), None))
            }
        }
    }
}

/// Platform description shared by `get_system_info` and the system info
/// resource. `health` is `None` when the upstream could not be reached.
pub fn platform_info(config: &ClientConfig, health: Option<&Value>) -> Value {
    let mut info = Map::new();
    info.insert("platform".to_string(), json!(PLATFORM_NAME));
    info.insert("version".to_string(), json!(PLATFORM_VERSION));
    info.insert("lastUpdated".to_string(), json!(now_rfc3339()));

    let Some(health) = health else {
        info.insert("status".to_string(), json!("error"));
        return Value::Object(info);
    };

    let health = health.get("data").unwrap_or(health);
    let status = health
        .get("status")
        .cloned()
        .filter(|status| !status.is_null())
        .unwrap_or_else(|| json!("operational"));
    let services = health
        .get("services")
        .cloned()
        .unwrap_or_else(|| json!({}));
    let prefix = format!("/api/{}", config.api_version);

    info.insert("status".to_string(), status);
    info.insert("services".to_string(), services);
    info.insert("capabilities".to_string(), json!(CAPABILITIES));
    info.insert(
        "endpoints".to_string(),
        json!({
            "products": format!("{prefix}/products"),
            "categories": format!("{prefix}/categories"),
            "pricingRules": format!("{prefix}/pricing-rules"),
            "carts": format!("{prefix}/carts"),
            "inventory": format!("{prefix}/inventory"),
            "media": format!("{prefix}/media"),
            "partners": format!("{prefix}/partners"),
            "salesChannels": format!("{prefix}/sales-channels"),
            "translations": format!("{prefix}/translations"),
            "productAttributes": format!("{prefix}/product-attributes"),
        }),
    );
    Value::Object(info)
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::{
        testing::{client_with, ScriptedTransport},
        HttpMethod,
    };

    fn dispatcher(max_retries: u32, transport: Arc<ScriptedTransport>) -> ToolDispatcher {
        let registry = ToolRegistry::new().expect("registry");
        ToolDispatcher::new(client_with(max_retries, transport), Arc::new(registry))
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object arguments")
    }

    #[tokio::test]
    async fn unknown_tool_yields_failure_envelope() {
        let transport = ScriptedTransport::always(Ok(json!({})));
        let result = dispatcher(3, transport.clone())
            .call("launch_rocket", Map::new())
            .await;

        assert_eq!(
            result.to_value(),
            json!({"success": false, "error": "Unknown tool: launch_rocket"})
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn get_product_wraps_body_in_success_envelope() {
        let transport = ScriptedTransport::always(Ok(json!({"id": "p-1", "name": "Widget"})));
        let result = dispatcher(3, transport.clone())
            .call("get_product", args(json!({"id": "p-1"})))
            .await;

        assert!(result.success);
        assert_eq!(result.data, Some(json!({"id": "p-1", "name": "Widget"})));
        assert_eq!(result.message.as_deref(), Some("Product retrieved successfully"));

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/products/p-1");
        // include* flags are filled from schema defaults and sent as query.
        assert!(request
            .query
            .contains(&("includeVariants".to_string(), "true".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn delete_product_reports_failure_after_all_attempts() {
        let transport = ScriptedTransport::always(Err(500));
        let result = dispatcher(2, transport.clone())
            .call("delete_product", args(json!({"id": "p-1"})))
            .await;

        assert!(!result.success);
        assert!(result
            .error
            .as_deref()
            .is_some_and(|error| error.contains("500")));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn missing_required_argument_fails_before_network() {
        let transport = ScriptedTransport::always(Ok(json!({})));
        let result = dispatcher(3, transport.clone())
            .call("add_cart_item", args(json!({"cartId": "c-1"})))
            .await;

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Missing required argument: productId")
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn body_routes_send_remaining_arguments_as_json() {
        let transport = ScriptedTransport::always(Ok(json!({"data": {"id": "i-1"}})));
        let result = dispatcher(1, transport.clone())
            .call(
                "update_cart_item",
                args(json!({"cartId": "c-1", "itemId": "i-1", "quantity": 2})),
            )
            .await;

        assert!(result.success);
        assert_eq!(result.data, Some(json!({"id": "i-1"})));
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/carts/c-1/items/i-1");
        assert_eq!(request.body, Some(json!({"quantity": 2})));
    }

    #[tokio::test]
    async fn list_categories_switches_to_tree_endpoint() {
        let transport = ScriptedTransport::always(Ok(json!([])));
        let dispatcher = dispatcher(1, transport.clone());

        dispatcher
            .call("list_categories", args(json!({"tree": true})))
            .await;
        dispatcher.call("list_categories", Map::new()).await;

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/categories/tree");
        assert!(requests[0].query.is_empty());
        assert_eq!(requests[1].path, "/categories");
        let mut query = requests[1].query.clone();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "50".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn health_check_adds_timestamp() {
        let transport = ScriptedTransport::always(Ok(json!({"status": "ok"})));
        let result = dispatcher(1, transport).call("health_check", Map::new()).await;

        let data = result.data.expect("health data");
        assert_eq!(data["status"], "ok");
        assert!(data["timestamp"].is_string());
    }

    #[tokio::test]
    async fn system_health_returns_upstream_health_unchanged() {
        let transport = ScriptedTransport::always(Ok(json!({"status": "healthy"})));
        let result = dispatcher(1, transport.clone())
            .call("get_system_health", Map::new())
            .await;

        assert!(result.success);
        assert_eq!(result.data, Some(json!({"status": "healthy"})));
        assert_eq!(
            result.message.as_deref(),
            Some("System health retrieved successfully")
        );
        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/health");
    }

    #[tokio::test]
    async fn system_info_merges_health_services() {
        let transport = ScriptedTransport::always(Ok(
            json!({"status": "healthy", "services": {"db": "up"}}),
        ));
        let result = dispatcher(1, transport.clone())
            .call("get_system_info", Map::new())
            .await;

        assert!(result.success);
        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/health".to_string()]);
        let data = result.data.expect("system data");
        assert_eq!(data["platform"], PLATFORM_NAME);
        assert_eq!(data["status"], "healthy");
        assert_eq!(data["services"]["db"], "up");
        assert_eq!(data["endpoints"]["products"], "/api/v1/products");
    }

    #[tokio::test]
    async fn system_info_reports_error_status_when_health_fails() {
        let transport = ScriptedTransport::always(Err(503));
        let result = dispatcher(1, transport)
            .call("get_system_info", Map::new())
            .await;

        assert!(!result.success);
        assert!(result.error.is_some());
        assert_eq!(result.data.expect("fallback data")["status"], "error");
    }

    #[tokio::test]
    async fn creation_tools_include_next_steps() {
        let transport = ScriptedTransport::always(Ok(json!({"id": "c-1"})));
        let result = dispatcher(1, transport)
            .call("create_cart", args(json!({"customerId": "u-1"})))
            .await;

        assert!(result.success);
        assert!(!result.next_steps.is_empty());
    }

    #[tokio::test]
    async fn every_known_tool_returns_boolean_success() {
        let transport = ScriptedTransport::always(Ok(json!({"data": null})));
        let dispatcher = dispatcher(1, transport);
        let names: Vec<&str> = dispatcher
            .registry()
            .iter()
            .map(|tool| tool.descriptor.name)
            .collect();

        for name in names {
            let envelope = dispatcher.call(name, Map::new()).await.to_value();
            assert!(envelope["success"].is_boolean(), "{name}");
            if envelope["success"] == json!(false) {
                assert!(envelope["error"].is_string(), "{name}");
            }
        }
    }
}
