use serde_json::json;

use super::ToolDescriptor;

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "health_check",
            "Check the health of the eCommerce platform",
            json!({}),
            &[],
        ),
        ToolDescriptor::new(
            "get_system_health",
            "Get system health status",
            json!({}),
            &[],
        ),
        ToolDescriptor::new(
            "get_system_info",
            "Get platform information and capabilities",
            json!({}),
            &[],
        ),
    ]
}
