use serde_json::json;

use super::{paged, string, ToolDescriptor};

fn cart_only(name: &'static str, description: &'static str) -> ToolDescriptor {
    ToolDescriptor::new(
        name,
        description,
        json!({ "cartId": string("Cart UUID") }),
        &["cartId"],
    )
}

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_cart",
            "Create a new shopping cart",
            json!({
                "customerId": string("Customer UUID"),
                "channelId": string("Sales channel UUID"),
                "currency": { "type": "string", "default": "USD", "description": "Currency code" }
            }),
            &["customerId"],
        ),
        ToolDescriptor::new(
            "add_cart_item",
            "Add a product to a cart",
            json!({
                "cartId": string("Cart UUID"),
                "productId": string("Product UUID"),
                "variantId": string("Product variant UUID"),
                "quantity": { "type": "number", "minimum": 1 },
                "customAttributes": {
                    "type": "object",
                    "description": "Custom attributes of the line item"
                }
            }),
            &["cartId", "productId", "quantity"],
        ),
        ToolDescriptor::new(
            "update_cart_item",
            "Update a line item in a cart",
            json!({
                "cartId": string("Cart UUID"),
                "itemId": string("Cart item UUID"),
                "quantity": { "type": "number", "minimum": 1 },
                "customAttributes": {
                    "type": "object",
                    "description": "Custom attributes of the line item"
                }
            }),
            &["cartId", "itemId", "quantity"],
        ),
        ToolDescriptor::new(
            "remove_cart_item",
            "Remove a line item from a cart",
            json!({
                "cartId": string("Cart UUID"),
                "itemId": string("UUID of the cart item to remove")
            }),
            &["cartId", "itemId"],
        ),
        cart_only("get_cart", "Get a cart with its items and totals"),
        ToolDescriptor::new(
            "get_cart_items",
            "List the items of a cart with pagination",
            paged(json!({ "cartId": string("Cart UUID") }), 20),
            &["cartId"],
        ),
        cart_only("get_cart_summary", "Get a cart summary with calculated prices"),
        cart_only("clear_cart", "Remove every item from a cart"),
    ]
}
