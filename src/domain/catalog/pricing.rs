use serde_json::json;

use super::{boolean, by_id, date_time, number, paged, string, string_enum, ToolDescriptor};

const RULE_TYPES: &[&str] = &[
    "percentage_discount",
    "fixed_discount",
    "buy_x_get_y",
    "tier_pricing",
    "bulk_discount",
];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_pricing_rule",
            "Create a pricing rule for discounts and promotions",
            json!({
                "name": string("Rule name"),
                "description": string("Rule description"),
                "ruleType": string_enum(RULE_TYPES, "Kind of pricing rule"),
                "discountType": string_enum(
                    &["percentage", "fixed_amount"],
                    "How the discount value is applied"
                ),
                "discountValue": number("Discount amount or percentage"),
                "conditions": {
                    "type": "object",
                    "description": "Rule conditions (minimum quantity, category ids, ...)"
                },
                "actions": {
                    "type": "object",
                    "description": "Rule actions (discount percentage, ...)"
                },
                "priority": { "type": "number", "default": 0 },
                "validFrom": date_time("Start of the validity window"),
                "validTo": date_time("End of the validity window"),
                "usageLimit": number("Maximum number of uses")
            }),
            &["name", "ruleType", "discountType", "discountValue", "validFrom"],
        ),
        by_id(
            "get_pricing_rule",
            "Get detailed information about a pricing rule",
            "Pricing rule UUID",
        ),
        ToolDescriptor::new(
            "update_pricing_rule",
            "Update an existing pricing rule",
            json!({
                "id": string("Pricing rule UUID"),
                "name": string("Rule name"),
                "description": string("Rule description"),
                "discountValue": number("Discount amount or percentage"),
                "conditions": { "type": "object", "description": "Rule conditions" },
                "actions": { "type": "object", "description": "Rule actions" },
                "priority": { "type": "number" },
                "validFrom": date_time("Start of the validity window"),
                "validTo": date_time("End of the validity window"),
                "usageLimit": { "type": "number" }
            }),
            &["id"],
        ),
        by_id(
            "delete_pricing_rule",
            "Delete a pricing rule",
            "UUID of the pricing rule to delete",
        ),
        ToolDescriptor::new(
            "apply_pricing_rules",
            "Calculate a price with the applicable pricing rules",
            json!({
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 1 },
                "basePrice": { "type": "number", "minimum": 0 },
                "customerId": string("Customer UUID"),
                "channelId": string("Sales channel UUID")
            }),
            &["quantity", "basePrice"],
        ),
        ToolDescriptor::new(
            "list_pricing_rules",
            "List pricing rules with optional filters",
            paged(
                json!({
                    "active": boolean("Filter by active state"),
                    "ruleType": string_enum(RULE_TYPES, "Filter by rule type")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "validate_pricing_rule",
            "Validate a pricing rule configuration before creating it",
            json!({
                "name": { "type": "string" },
                "type": { "type": "string" },
                "conditions": { "type": "object" },
                "actions": { "type": "object" },
                "validFrom": { "type": "string", "format": "date-time" },
                "validUntil": { "type": "string", "format": "date-time" }
            }),
            &["name", "type", "conditions", "actions", "validFrom"],
        ),
        ToolDescriptor::new(
            "get_pricing_rule_by_name",
            "Get a pricing rule by its name",
            json!({ "name": string("Pricing rule name") }),
            &["name"],
        ),
        ToolDescriptor::new(
            "update_pricing_rule_status",
            "Activate or deactivate a pricing rule",
            json!({
                "id": string("Pricing rule UUID"),
                "isActive": boolean("Whether the rule is active")
            }),
            &["id", "isActive"],
        ),
        ToolDescriptor::new(
            "get_active_pricing_rules",
            "List the pricing rules that are currently active",
            paged(json!({}), 20),
            &[],
        ),
        ToolDescriptor::new(
            "bulk_calculate_price",
            "Calculate prices for many products in one call",
            json!({
                "items": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "productId": { "type": "string" },
                            "variantId": { "type": "string" },
                            "quantity": { "type": "number", "minimum": 1 },
                            "basePrice": { "type": "number", "minimum": 0 }
                        },
                        "required": ["productId", "quantity", "basePrice"]
                    }
                },
                "customerId": string("Customer UUID"),
                "channelId": string("Sales channel UUID")
            }),
            &["items"],
        ),
        ToolDescriptor::new(
            "get_pricing_rules_by_priority",
            "List pricing rules with a given priority",
            json!({ "priority": number("Rule priority") }),
            &["priority"],
        ),
        ToolDescriptor::new(
            "bulk_update_pricing_rule_status",
            "Activate or deactivate several pricing rules at once",
            json!({
                "ruleIds": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Pricing rule UUIDs"
                },
                "isActive": boolean("Whether the rules are active")
            }),
            &["ruleIds", "isActive"],
        ),
        by_id(
            "get_pricing_rule_stats",
            "Get usage statistics for a pricing rule",
            "Pricing rule UUID",
        ),
        ToolDescriptor::new(
            "duplicate_pricing_rule",
            "Copy a pricing rule under a new name",
            json!({
                "id": string("UUID of the rule to copy"),
                "newName": string("Name of the copy")
            }),
            &["id", "newName"],
        ),
    ]
}
