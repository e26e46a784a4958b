use serde_json::json;

use super::{by_id, number, paged, string, string_enum, ToolDescriptor};

const TIERS: &[&str] = &["bronze", "silver", "gold", "platinum"];
const STATUSES: &[&str] = &["active", "inactive", "pending", "suspended"];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_partner",
            "Create a new business partner",
            json!({
                "name": string("Partner name"),
                "email": string("Partner email"),
                "phone": string("Phone number"),
                "address": string("Postal address"),
                "tier": string_enum(TIERS, "Partner tier"),
                "status": string_enum(STATUSES, "Partner status"),
                "commissionRate": number("Commission rate in percent")
            }),
            &["name", "email"],
        ),
        by_id(
            "get_partner",
            "Get detailed information about a partner",
            "Partner UUID",
        ),
        ToolDescriptor::new(
            "list_partners",
            "List partners with optional filters",
            paged(
                json!({
                    "status": string_enum(STATUSES, "Filter by status"),
                    "tier": string_enum(TIERS, "Filter by tier")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "update_partner",
            "Update an existing partner",
            json!({
                "id": string("Partner UUID"),
                "name": string("Partner name"),
                "email": string("Partner email"),
                "phone": string("Phone number"),
                "address": string("Postal address"),
                "tier": { "type": "string", "enum": TIERS },
                "commissionRate": number("Commission rate in percent")
            }),
            &["id"],
        ),
        by_id(
            "delete_partner",
            "Delete a partner",
            "UUID of the partner to delete",
        ),
    ]
}
