//! Tools exposed via Model Context Protocol
//!
//! `tools/list` advertises every registered descriptor; `tools/call` hands the
//! arguments to the [`ToolDispatcher`](crate::domain::dispatcher::ToolDispatcher)
//! and wraps the resulting envelope in a `CallToolResult`.

use rust_mcp_sdk::schema::{CallToolRequestParams, CallToolResult, ContentBlock, TextContent, Tool};
use serde_json::Value;

use crate::domain::{envelope::ToolResult, registry::ToolRegistry};
use crate::mcp::rpc::{json_rpc_error, json_rpc_result};
use crate::AppState;

pub fn build_tools_list(registry: &ToolRegistry) -> Vec<Tool> {
    registry
        .iter()
        .map(|registered| registered.tool.clone())
        .collect()
}

pub fn call_tool_result(result: &ToolResult) -> CallToolResult {
    let envelope = result.to_value();
    let text = serde_json::to_string_pretty(&envelope).expect("tool envelope serialization");

    CallToolResult {
        content: vec![ContentBlock::from(TextContent::new(text, None, None))],
        is_error: (!result.success).then_some(true),
        meta: None,
        structured_content: envelope.as_object().cloned(),
    }
}

pub async fn handle_tools_call(
    state: &AppState,
    id: Option<Value>,
    params: Option<Value>,
) -> Value {
    let Some(raw_params) = params else {
        return json_rpc_error(id, -32602, "Invalid params");
    };

    let tool_call: CallToolRequestParams = match serde_json::from_value(raw_params) {
        Ok(value) => value,
        Err(_) => return json_rpc_error(id, -32602, "Invalid params"),
    };

    let result = state
        .dispatcher
        .call(&tool_call.name, tool_call.arguments.unwrap_or_default())
        .await;

    json_rpc_result(
        id,
        serde_json::to_value(call_tool_result(&result)).expect("tool call result serialization"),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lists_every_registered_tool() {
        let registry = ToolRegistry::new().expect("registry");
        let tools = build_tools_list(&registry);

        assert_eq!(tools.len(), registry.len());
        assert!(tools.iter().any(|tool| tool.name == "search_products"));
    }

    #[test]
    fn success_is_not_flagged_as_error() {
        let result = call_tool_result(&ToolResult::from_response(json!({"id": "p-1"}), "ok"));

        assert_eq!(result.is_error, None);
        let structured = result.structured_content.expect("structured envelope");
        assert_eq!(structured["success"], json!(true));
    }

    #[test]
    fn failure_sets_is_error_and_keeps_text_envelope() {
        let result = call_tool_result(&ToolResult::failure("Unknown tool: nope"));

        assert_eq!(result.is_error, Some(true));
        let value = serde_json::to_value(&result).expect("serialize");
        let text = value["content"][0]["text"].as_str().expect("text content");
        let parsed: Value = serde_json::from_str(text).expect("text is JSON");
        assert_eq!(parsed, json!({"success": false, "error": "Unknown tool: nope"}));
    }
}
