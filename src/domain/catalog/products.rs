use serde_json::json;

use super::{by_id, number, paged, string, string_enum, ToolDescriptor};

const PRODUCT_TYPES: &[&str] = &["simple", "configurable", "bundle", "grouped", "virtual"];
const PRODUCT_STATUSES: &[&str] = &["active", "inactive", "draft", "archived"];

pub(super) fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "create_product",
            "Create a new product in the eCommerce platform",
            json!({
                "name": string("Product name"),
                "description": string("Product description"),
                "sku": string("Unique product SKU"),
                "productType": string_enum(PRODUCT_TYPES, "Product type"),
                "categoryId": string("Category UUID"),
                "price": number("Base price"),
                "status": {
                    "type": "string",
                    "enum": PRODUCT_STATUSES,
                    "default": "draft"
                },
                "weight": number("Product weight"),
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Product tags"
                }
            }),
            &["name", "sku", "productType"],
        ),
        ToolDescriptor::new(
            "search_products",
            "Search products with flexible filters",
            paged(
                json!({
                    "search": string("Search keyword"),
                    "categoryId": string("Filter by category UUID"),
                    "productType": string_enum(PRODUCT_TYPES, "Filter by product type"),
                    "status": string_enum(PRODUCT_STATUSES, "Filter by status"),
                    "priceMin": number("Minimum price"),
                    "priceMax": number("Maximum price")
                }),
                20,
            ),
            &[],
        ),
        ToolDescriptor::new(
            "get_product",
            "Get detailed information about a product",
            json!({
                "id": string("Product UUID"),
                "includeVariants": { "type": "boolean", "default": true },
                "includeInventory": { "type": "boolean", "default": true },
                "includePricing": { "type": "boolean", "default": true }
            }),
            &["id"],
        ),
        ToolDescriptor::new(
            "update_product",
            "Update an existing product",
            json!({
                "id": string("Product UUID"),
                "name": string("Product name"),
                "description": string("Product description"),
                "price": number("Base price"),
                "status": string_enum(PRODUCT_STATUSES, "Product status"),
                "categoryId": string("Category UUID"),
                "tags": { "type": "array", "items": { "type": "string" } }
            }),
            &["id"],
        ),
        by_id(
            "delete_product",
            "Delete a product from the platform",
            "UUID of the product to delete",
        ),
        ToolDescriptor::new(
            "get_product_by_handle",
            "Get a product by its handle (URL slug)",
            json!({ "handle": string("Product handle or slug") }),
            &["handle"],
        ),
    ]
}
