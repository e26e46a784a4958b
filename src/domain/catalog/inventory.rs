use serde_json::json;

use super::{boolean, paged, string, ToolDescriptor};

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_inventory",
            "Create an inventory record for a product",
            json!({
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 0, "description": "Quantity in stock" },
                "reservedQuantity": { "type": "number", "minimum": 0, "default": 0 },
                "lowStockThreshold": { "type": "number", "minimum": 0, "default": 10 },
                "location": string("Warehouse location")
            }),
            &["productId", "quantity"],
        ),
        ToolDescriptor::new(
            "check_inventory",
            "Check whether a product quantity is available",
            json!({
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 1 },
                "location": string("Warehouse location")
            }),
            &["productId", "quantity"],
        ),
        ToolDescriptor::new(
            "reserve_inventory",
            "Reserve stock for an order",
            json!({
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 1 },
                "reservationId": string("Unique reservation id"),
                "expiresAt": { "type": "string", "format": "date-time" }
            }),
            &["productId", "quantity", "reservationId"],
        ),
        ToolDescriptor::new(
            "get_inventory",
            "Get the inventory of a product",
            json!({
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID")
            }),
            &["productId"],
        ),
        ToolDescriptor::new(
            "list_inventory",
            "List inventory records with filters",
            paged(
                json!({
                    "productId": string("Filter by product UUID"),
                    "location": string("Filter by warehouse location"),
                    "lowStock": boolean("Only records below their low stock threshold")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "update_inventory",
            "Update an inventory record",
            json!({
                "id": string("Inventory record UUID"),
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 0 },
                "reservedQuantity": { "type": "number", "minimum": 0 },
                "lowStockThreshold": { "type": "number", "minimum": 0 },
                "location": string("Warehouse location")
            }),
            &["id"],
        ),
    ]
}
