use serde_json::json;

use super::{boolean, by_id, number, paged, string, string_enum, ToolDescriptor};

const CHANNEL_TYPES: &[&str] = &[
    "online",
    "offline",
    "mobile",
    "retail",
    "wholesale",
    "marketplace",
];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_sales_channel",
            "Create a new sales channel",
            json!({
                "name": string("Sales channel name"),
                "code": string("Unique sales channel code"),
                "type": string_enum(CHANNEL_TYPES, "Sales channel type"),
                "description": string("Sales channel description"),
                "configuration": { "type": "object", "description": "Channel configuration" },
                "isActive": {
                    "type": "boolean",
                    "default": true,
                    "description": "Whether the channel is active"
                },
                "currency": { "type": "string", "default": "VND", "description": "Currency code" },
                "taxRate": number("Tax rate in percent")
            }),
            &["name", "code", "type"],
        ),
        by_id(
            "get_sales_channel",
            "Get detailed information about a sales channel",
            "Sales channel UUID",
        ),
        ToolDescriptor::new(
            "get_sales_channel_by_code",
            "Get a sales channel by its code",
            json!({ "code": string("Sales channel code") }),
            &["code"],
        ),
        ToolDescriptor::new(
            "list_sales_channels",
            "List sales channels with optional filters",
            paged(
                json!({
                    "type": string_enum(CHANNEL_TYPES, "Filter by channel type"),
                    "isActive": boolean("Filter by active state")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "update_sales_channel",
            "Update an existing sales channel",
            json!({
                "id": string("Sales channel UUID"),
                "name": string("Sales channel name"),
                "description": string("Sales channel description"),
                "configuration": { "type": "object", "description": "Channel configuration" },
                "isActive": boolean("Whether the channel is active"),
                "currency": string("Currency code"),
                "taxRate": number("Tax rate in percent")
            }),
            &["id"],
        ),
        by_id(
            "delete_sales_channel",
            "Delete a sales channel",
            "UUID of the sales channel to delete",
        ),
        by_id(
            "activate_sales_channel",
            "Activate a sales channel",
            "Sales channel UUID",
        ),
        by_id(
            "deactivate_sales_channel",
            "Deactivate a sales channel",
            "Sales channel UUID",
        ),
        by_id(
            "get_sales_channel_statistics",
            "Get statistics for a sales channel",
            "Sales channel UUID",
        ),
    ]
}
